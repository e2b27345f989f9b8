use boardcom::{BoardComConfig, BoardConfig, Dispatcher, Header, Request, Response, SystemRunner};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;

/// Integration tests for the BoardCom library
#[cfg(test)]
mod integration_tests {
    use super::*;

    #[test]
    fn test_config_serialization() {
        let config = BoardComConfig::default();
        let toml_str = toml::to_string(&config).expect("Failed to serialize config");
        let deserialized: BoardComConfig =
            toml::from_str(&toml_str).expect("Failed to deserialize config");

        assert_eq!(config.global.log_level, deserialized.global.log_level);
        assert_eq!(config.global.timeout_ms, deserialized.global.timeout_ms);
    }

    #[test]
    fn test_config_defaults() {
        let config = BoardComConfig::default();

        assert_eq!(config.global.log_level, "info");
        assert_eq!(config.global.timeout_ms, 0);
        assert!(!config.global.echo_commands);
        assert!(config.boards.is_empty());
    }

    #[tokio::test]
    async fn test_debug_short_circuit_end_to_end() {
        // The monitor path does not exist; only the short-circuit keeps
        // this from reporting a bus error.
        let board = BoardConfig {
            monitor_cmd: "/nonexistent/boardcom-monitor".to_string(),
            ..BoardConfig::default()
        };
        let dispatcher = Dispatcher::new(board, Arc::new(SystemRunner));

        let request = Request::new(vec![5, 0xAB], Header::write().with_debug(true));
        let response = dispatcher.dispatch(&request).await.unwrap();
        assert_eq!(response, Response::debug_ack());
    }

    #[tokio::test]
    async fn test_missing_debugger_tool_is_bus_error() {
        let board = BoardConfig {
            monitor_cmd: "/nonexistent/boardcom-monitor".to_string(),
            ..BoardConfig::default()
        };
        let dispatcher = Dispatcher::new(board, Arc::new(SystemRunner));

        let response = dispatcher
            .dispatch(&Request::new(vec![0], Header::read()))
            .await
            .unwrap();
        assert_eq!(response, Response::bus_error());
    }
}

/// End-to-end dispatch against stub debugger executables
#[cfg(unix)]
#[cfg(test)]
mod stub_tool_tests {
    use super::*;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    fn stub_tool(dir: &Path, name: &str, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = dir.join(name);
        fs::write(&path, body).unwrap();
        let mut perms = fs::metadata(&path).unwrap().permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&path, perms).unwrap();
        path
    }

    fn board_with(monitor: &Path, scan: &Path) -> BoardConfig {
        BoardConfig {
            name: "stub".to_string(),
            description: "Stub debugger board".to_string(),
            base_address: 0x4000_0000,
            monitor_cmd: monitor.display().to_string(),
            scan_cmd: scan.display().to_string(),
        }
    }

    fn stub_dispatcher(dir: &TempDir, monitor_body: &str, scan_body: &str) -> Dispatcher {
        let monitor = stub_tool(dir.path(), "monitor", monitor_body);
        let scan = stub_tool(dir.path(), "saveScanData", scan_body);
        Dispatcher::new(board_with(&monitor, &scan), Arc::new(SystemRunner))
    }

    const ECHO_ARGS: &str = "#!/bin/sh\nprintf '%s\\n' \"$*\"\n";
    const THREE_LINES: &str = "#!/bin/sh\nprintf '1\\n2\\n3\\n'\n";
    const EXIT_3: &str = "#!/bin/sh\nexit 3\n";

    #[tokio::test]
    async fn test_write_through_stub_monitor() {
        let dir = TempDir::new().unwrap();
        let dispatcher = stub_dispatcher(&dir, ECHO_ARGS, THREE_LINES);

        let request = Request::write_pairs(&[(5, 0xAB), (9, 0x10)], Header::write());
        let response = dispatcher.dispatch(&request).await.unwrap();

        assert!(!response.err);
        assert_eq!(
            response.data,
            vec!["1073741829 0x000000ab", "1073741833 0x00000010"]
        );
    }

    #[tokio::test]
    async fn test_read_collects_one_line_per_offset() {
        let dir = TempDir::new().unwrap();
        let dispatcher = stub_dispatcher(&dir, ECHO_ARGS, THREE_LINES);

        let request = Request::new(vec![3, 7], Header::read());
        let response = dispatcher.dispatch(&request).await.unwrap();

        assert!(!response.err);
        assert_eq!(response.data, vec!["1073741827", "1073741831"]);
    }

    #[tokio::test]
    async fn test_failing_monitor_reports_bus_error() {
        let dir = TempDir::new().unwrap();
        let dispatcher = stub_dispatcher(&dir, EXIT_3, THREE_LINES);

        let request = Request::new(vec![0, 4, 8], Header::read());
        let response = dispatcher.dispatch(&request).await.unwrap();

        assert!(response.err);
        assert_eq!(response.err_msg, "Bus error");
        assert!(response.data.is_empty());
    }

    #[tokio::test]
    async fn test_scan_splits_stub_output() {
        let dir = TempDir::new().unwrap();
        let dispatcher = stub_dispatcher(&dir, ECHO_ARGS, THREE_LINES);

        let request = Request::new(Vec::new(), Header::scan(false, 3));
        let response = dispatcher.dispatch(&request).await.unwrap();

        assert!(!response.err);
        assert_eq!(response.data, vec!["1", "2", "3"]);
    }

    #[tokio::test]
    async fn test_scan_reset_variant_reaches_tool() {
        let dir = TempDir::new().unwrap();
        // Scan tool echoes its own arguments back
        let dispatcher = stub_dispatcher(&dir, ECHO_ARGS, ECHO_ARGS);

        let request = Request::new(Vec::new(), Header::scan(true, 4));
        let response = dispatcher.dispatch(&request).await.unwrap();
        assert_eq!(response.data, vec!["-rn 4"]);

        let request = Request::new(Vec::new(), Header::scan(false, 4));
        let response = dispatcher.dispatch(&request).await.unwrap();
        assert_eq!(response.data, vec!["-n 4"]);
    }

    #[tokio::test]
    async fn test_silent_tool_yields_empty_data() {
        let dir = TempDir::new().unwrap();
        let dispatcher = stub_dispatcher(&dir, "#!/bin/sh\nexit 0\n", "#!/bin/sh\nexit 0\n");

        let request = Request::new(vec![0, 4], Header::read());
        let response = dispatcher.dispatch(&request).await.unwrap();
        assert!(!response.err);
        assert!(response.data.is_empty());

        let request = Request::new(Vec::new(), Header::scan(false, 8));
        let response = dispatcher.dispatch(&request).await.unwrap();
        assert!(!response.err);
        assert!(response.data.is_empty());
    }

    #[tokio::test]
    async fn test_transaction_timeout_is_caller_imposed() {
        let dir = TempDir::new().unwrap();
        let dispatcher = stub_dispatcher(&dir, "#!/bin/sh\nsleep 2\n", THREE_LINES);

        let request = Request::new(vec![0], Header::read());
        let result = timeout(Duration::from_millis(100), dispatcher.dispatch(&request)).await;

        assert!(result.is_err()); // Should timeout
    }
}
