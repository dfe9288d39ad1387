//! Execution Contexts
//!
//! Implementations of the `ExecutionContext` port:
//! - `DockerContext` - ephemeral container per command
//! - `HostContext` - local toolchain

mod docker;
mod host;

pub use docker::{DockerContext, CONTAINER_WORKDIR};
pub use host::HostContext;

/// Image providing `cryptogen` and `configtxgen`
pub const DEFAULT_TOOLS_IMAGE: &str = "hyperledger/fabric-tools:x86_64-1.1.0";

/// Join stdout and stderr into one string for error reporting
fn combined_output(stdout: &[u8], stderr: &[u8]) -> String {
    let stdout = String::from_utf8_lossy(stdout);
    let stderr = String::from_utf8_lossy(stderr);
    match (stdout.trim().is_empty(), stderr.trim().is_empty()) {
        (true, true) => String::new(),
        (false, true) => stdout.trim_end().to_string(),
        (true, false) => stderr.trim_end().to_string(),
        (false, false) => format!("{}\n{}", stdout.trim_end(), stderr.trim_end()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combined_output_joins_streams() {
        assert_eq!(combined_output(b"out\n", b"err\n"), "out\nerr");
        assert_eq!(combined_output(b"", b"err\n"), "err");
        assert_eq!(combined_output(b"out\n", b"  \n"), "out");
        assert_eq!(combined_output(b"", b""), "");
    }
}
