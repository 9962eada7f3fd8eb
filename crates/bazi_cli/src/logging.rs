use tracing_subscriber::EnvFilter;

/// Workspace crate targets that receive log output. The binary's own
/// events carry the bin crate name, `bazi`.
const CRATE_TARGETS: &[&str] = &["bazi", "bazi_base", "bazi_rs", "bazi_search", "bazi_time"];

/// Install the subscriber for a `-v` count.
///
/// 0 → warn, 1 → info, 2 → debug, 3+ → trace. `RUST_LOG` wins when set.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn default_filter(verbosity: u8) -> String {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    CRATE_TARGETS
        .iter()
        .map(|t| format!("{t}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binary_target_matches_module_path() {
        let bin = module_path!().split("::").next().unwrap();
        assert!(CRATE_TARGETS.contains(&bin), "{bin} not in filter");
    }

    #[test]
    fn verbosity_levels() {
        assert!(default_filter(0).starts_with("bazi=warn,"));
        assert!(default_filter(2).contains("bazi_search=debug"));
        assert!(default_filter(9).ends_with("bazi_time=trace"));
    }
}
