use std::fmt::Display;

use log::{error, info, warn};

pub fn print_err(e: &impl Display) {
    error!("{e:#}")
}

pub fn print_err_info(e: &impl Display) {
    info!("{e:#}")
}

pub(crate) fn join<T>(collection: T, sep: &str) -> String
where
    T: IntoIterator,
    T::Item: Display,
{
    collection
        .into_iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(sep)
}

/// Missing data is not fatal for a report: log it and carry on with defaults.
pub(crate) fn unwrap_or_def_verbose<T, E>(result: Result<T, E>) -> T
where
    T: Default,
    E: std::fmt::Display,
{
    result
        .inspect_err(|e| {
            warn!("Using defaults: {e:#}");
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::format_err;

    #[test]
    fn join_displays() {
        assert_eq!(join([1, 2, 3], ", "), "1, 2, 3");
        assert_eq!(join(Vec::<String>::new(), "\n"), "");
    }

    #[test]
    fn default_on_error() {
        let v: u32 = unwrap_or_def_verbose(Err(format_err!("boom")));
        assert_eq!(v, 0);
        assert_eq!(unwrap_or_def_verbose::<_, anyhow::Error>(Ok(7u32)), 7);
    }
}
