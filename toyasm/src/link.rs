use indexmap::IndexSet;
use log::debug;

use crate::{
    error::{AsmError, Result},
    labels::Labels,
    record::{Data, Slot},
};

/// Replaces every placeholder with its external address.
///
/// Fails on the first symbol missing from `externals`; nothing is
/// returned for a sequence that cannot be fully resolved.
pub fn link(slots: Vec<Slot>, externals: &Labels) -> Result<Vec<Data>> {
    let linked = slots
        .into_iter()
        .map(|slot| match slot {
            Slot::Resolved(data) => Ok(data),
            Slot::Placeholder(symbol) => match externals.get(&symbol) {
                Some(address) => {
                    debug!("resolved {symbol} to {address:#06x}");
                    Ok(Data::Word(address))
                }
                None => Err(AsmError::UndefinedSymbol { symbol }),
            },
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(linked)
}

/// Names still awaiting resolution, first occurrence order.
pub fn unresolved_symbols(slots: &[Slot]) -> Vec<&str> {
    slots
        .iter()
        .filter_map(|slot| match slot {
            Slot::Placeholder(symbol) => Some(symbol.as_str()),
            Slot::Resolved(_) => None,
        })
        .collect::<IndexSet<_>>()
        .into_iter()
        .collect()
}
