pub (crate) fn fmt_bin_to_hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect::<String>()
}

pub (crate) fn bin_reverse_bytes(bytes: &[u8]) -> Vec<u8> {
    let mut res = bytes.to_vec();
    res.reverse();
    res
}
