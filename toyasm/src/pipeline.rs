use log::warn;

use crate::record::Data;

/// Reserved byte flagged by [`error_scan`].
pub const SENTINEL: u8 = 0x00;

/// Peephole pass. Does nothing yet; must keep chunk order and count.
pub fn optimize(data: Vec<Data>) -> Vec<Data> {
    data
}

/// Layout/relocation pass. Does nothing yet.
pub fn calculate_addresses(data: Vec<Data>) -> Vec<Data> {
    data
}

/// Reports every chunk that is exactly the sentinel byte. Operand words
/// holding a zero byte are not flagged. The findings are advisory and never
/// fail an assembly.
pub fn error_scan(data: &[Data]) -> Vec<String> {
    let report = data
        .iter()
        .filter(|chunk| chunk.to_bytes() == [SENTINEL])
        .map(|_| format!("Invalid opcode: {:#04x}", SENTINEL))
        .collect::<Vec<_>>();

    if !report.is_empty() {
        warn!("error scan found {} sentinel chunks", report.len());
    }

    report
}

/// Renders encoded output as lowercase hex.
pub fn generate_output(data: &[Data]) -> String {
    let bytes = data.iter().flat_map(Data::to_bytes).collect::<Vec<u8>>();

    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}
