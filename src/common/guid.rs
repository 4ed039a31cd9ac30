use crate::common::binary::{bin_reverse_bytes, fmt_bin_to_hex};
use crate::error::{format_err, map_hex_decode_err, Result};

const GROUP_LENS: [usize; 5] = [8, 4, 4, 4, 12];
const GUID_LEN: usize = 16;

/// Parses a Microsoft encoded style GUID into its 16 stored bytes.
/// https://en.wikipedia.org/wiki/Universally_unique_identifier#Encoding
pub fn parse_guid(guid: &str) -> Result<[u8; GUID_LEN]> {
    let parts: Vec<&str> = guid.split('-').collect();
    if parts.len() != GROUP_LENS.len()
        || parts.iter().zip(GROUP_LENS).any(|(part, len)| part.len() != len)
    {
        return Err(format_err(None));
    }

    let mut ret = [0u8; GUID_LEN];
    let mut k = 0;
    for (i, part) in parts.iter().enumerate() {
        let mut bts = hex::decode(part)
            .map_err(map_hex_decode_err)?;

        // Groups 0-2 are stored little endian, groups 3-4 keep their
        // textual byte order.
        if i < 3 {
            bts = bin_reverse_bytes(&bts);
        }

        ret[k..k + bts.len()].copy_from_slice(&bts);
        k += bts.len();
    }

    Ok(ret)
}

/// Renders the stored bytes as a hex literal with the original GUID
/// text in a trailing comment.
pub fn format_sid(bytes: &[u8; GUID_LEN], guid: &str) -> String {
    format!("0x{} /* uuid = {} */", fmt_bin_to_hex(bytes), guid)
}

pub fn guid_to_sid(guid: &str) -> Result<String> {
    let bytes = parse_guid(guid)?;

    Ok(format_sid(&bytes, guid))
}
