use std::sync::Arc;

use tracing::debug;
use vizbench_common::LoadError;
use vizbench_panes::Display;

use crate::model::Bundle;

/// The order displays load in, plus the index of the display whose time
/// matcher decided it.
pub(crate) struct LoadOrder {
    pub displays: Vec<Arc<Display>>,
    pub authority: Option<usize>,
}

/// Ask the first display with a time matcher for the load order, then
/// synchronize every display's time state to that display's descriptor.
/// Without a matcher the bundle order stands.
pub(crate) fn load_order(bundle: &Bundle, panes: usize) -> Result<LoadOrder, LoadError> {
    let displays = bundle.displays();
    let authority = displays
        .iter()
        .enumerate()
        .find_map(|(i, d)| d.descriptor().time_matcher().map(|m| (i, m)));

    let Some((owner, matcher)) = authority else {
        check(displays, displays, panes)?;
        return Ok(LoadOrder {
            displays: displays.to_vec(),
            authority: None,
        });
    };

    let ordered = matcher.display_load_order(displays);
    check(displays, &ordered, panes)?;

    let authority_descriptor = displays[owner].descriptor();
    for display in &ordered {
        display
            .descriptor()
            .synchronize_time_matching(authority_descriptor);
    }
    debug!(authority = owner, "displays ordered by time matcher");

    Ok(LoadOrder {
        displays: ordered,
        authority: Some(owner),
    })
}

/// The ordered list must hold every bundle display exactly once, one per
/// pane.
fn check(bundle: &[Arc<Display>], ordered: &[Arc<Display>], panes: usize) -> Result<(), LoadError> {
    if ordered.len() != panes {
        return Err(LoadError::Ordering {
            detail: format!(
                "{} displays returned for {} panes",
                ordered.len(),
                panes
            ),
        });
    }
    for (i, display) in ordered.iter().enumerate() {
        if !bundle.iter().any(|b| Display::same(b, display)) {
            return Err(LoadError::Ordering {
                detail: format!("display {} at position {i} is not part of the bundle", display.id()),
            });
        }
        if ordered[..i].iter().any(|o| Display::same(o, display)) {
            return Err(LoadError::Ordering {
                detail: format!("display {} appears more than once", display.id()),
            });
        }
    }
    Ok(())
}
