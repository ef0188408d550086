//! Tool dispatch behavior against a fixture probe

mod common;

use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Duration;

use common::{battery, process, server_with, server_with_config, FixtureProbe};
use mcp_common::{EmbeddableError, EmbeddableMcp};
use serde_json::json;
use sysmon_mcp::types::BatteryState;
use sysmon_mcp::{Config, ErrorKind};
use tokio_util::sync::CancellationToken;

const ALL_TOOLS: [&str; 11] = [
    "get_cpu_usage",
    "get_memory_usage",
    "get_network_stats",
    "get_battery_status",
    "get_gpu_usage",
    "get_system_info",
    "get_disk_usage",
    "list_processes",
    "kill_process",
    "launch_process",
    "list_files",
];

#[tokio::test]
async fn every_tool_answers_with_text_or_error() {
    let server = server_with(Arc::new(FixtureProbe::default()));
    let dir = tempfile::tempdir().unwrap();

    for name in ALL_TOOLS {
        let args = match name {
            "kill_process" => json!({ "pid": 1 }),
            "launch_process" => json!({ "command": "true" }),
            "list_files" => json!({ "path": dir.path().to_string_lossy() }),
            _ => json!({}),
        };
        let env = server.invoke(name, args, CancellationToken::new()).await;

        assert!(!env.human_text().is_empty(), "{} returned empty text", name);
        if env.is_error() {
            assert!(env.structured_data().is_none(), "{} mixed error and data", name);
        } else {
            assert!(env.structured_data().is_some(), "{} has no data", name);
        }
    }
}

#[tokio::test]
async fn telemetry_text_templates() {
    let server = server_with(Arc::new(FixtureProbe::default()));

    let cpu = server.invoke("get_cpu_usage", json!({}), CancellationToken::new()).await;
    assert_eq!(cpu.human_text(), "CPU Usage: 12.50%");
    assert_eq!(cpu.structured_data().unwrap()["cpu_percent"], json!(12.5));

    let mem = server
        .invoke("get_memory_usage", json!({}), CancellationToken::new())
        .await;
    assert_eq!(
        mem.human_text(),
        "Memory - Total: 1000, Used: 250, Free: 750, Usage: 25.00%"
    );

    let net = server
        .invoke("get_network_stats", json!({}), CancellationToken::new())
        .await;
    assert_eq!(
        net.human_text(),
        "Network Interfaces:\neth0 - Sent: 100B, Received: 200B\n"
    );
}

#[tokio::test]
async fn gpu_failure_is_metric_unavailable() {
    let server = server_with(Arc::new(FixtureProbe::default()));
    let env = server.invoke("get_gpu_usage", json!({}), CancellationToken::new()).await;
    assert_eq!(env.error_kind(), Some(ErrorKind::MetricUnavailable));
}

#[tokio::test]
async fn unknown_tool_is_an_error_envelope() {
    let server = server_with(Arc::new(FixtureProbe::default()));
    let env = server.invoke("reboot", json!({}), CancellationToken::new()).await;
    assert_eq!(env.error_kind(), Some(ErrorKind::UnknownTool));
    assert!(env.human_text().contains("reboot"));
}

#[tokio::test]
async fn top_three_by_cpu() {
    let server = server_with(Arc::new(FixtureProbe::default()));
    let env = server
        .invoke("list_processes", json!({ "limit": 3 }), CancellationToken::new())
        .await;

    assert_eq!(
        env.human_text(),
        "Top Processes:\n\
         PID=2 Name=compiler CPU=50.00%\n\
         PID=3 Name=browser CPU=30.00%\n\
         PID=1 Name=init CPU=10.00%\n"
    );
}

#[tokio::test]
async fn non_positive_limit_uses_default() {
    let probe = FixtureProbe {
        processes: (1..=8).map(|pid| process(pid, "p", pid as f32)).collect(),
        ..Default::default()
    };
    let server = server_with(Arc::new(probe));

    for limit in [json!(0), json!(-2), serde_json::Value::Null] {
        let env = server
            .invoke("list_processes", json!({ "limit": limit }), CancellationToken::new())
            .await;
        let procs = env.structured_data().unwrap()["processes"].as_array().unwrap().len();
        assert_eq!(procs, 5);
    }
}

#[tokio::test]
async fn all_processes_in_pid_order() {
    let server = server_with(Arc::new(FixtureProbe::default()));
    let env = server
        .invoke("list_processes", json!({ "all": true }), CancellationToken::new())
        .await;

    assert!(env.human_text().starts_with("Running Processes:\n"));
    let data = env.structured_data().unwrap();
    assert_eq!(data["ranked"], json!(false));
    let pids: Vec<u64> = data["processes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["pid"].as_u64().unwrap())
        .collect();
    assert_eq!(pids, vec![1, 2, 3, 4]);
}

#[tokio::test]
async fn no_battery_is_not_an_error() {
    let server = server_with(Arc::new(FixtureProbe::default()));
    let env = server
        .invoke("get_battery_status", json!({}), CancellationToken::new())
        .await;

    assert!(!env.is_error());
    assert_eq!(env.human_text(), "No battery detected");
    assert_eq!(env.structured_data(), Some(&json!({ "batteries": [] })));
}

#[tokio::test]
async fn battery_lines() {
    let probe = FixtureProbe {
        batteries: vec![
            battery(0, 80.0, BatteryState::Charging),
            battery(1, 100.0, BatteryState::Full),
        ],
        ..Default::default()
    };
    let server = server_with(Arc::new(probe));
    let env = server
        .invoke("get_battery_status", json!({}), CancellationToken::new())
        .await;

    assert_eq!(
        env.human_text(),
        "Battery 0: 80.00% (charging)\nBattery 1: 100.00% (full)\n"
    );
}

#[tokio::test]
async fn kill_missing_process() {
    let probe = Arc::new(FixtureProbe::default());
    let server = server_with(probe.clone());

    let env = server
        .invoke("kill_process", json!({ "pid": 999_999 }), CancellationToken::new())
        .await;
    assert_eq!(env.error_kind(), Some(ErrorKind::ProcessNotFound));

    let env = server
        .invoke("kill_process", json!({ "pid": 3 }), CancellationToken::new())
        .await;
    assert_eq!(env.human_text(), "Killed process 3");
}

#[tokio::test]
async fn invalid_pid_never_reaches_probe() {
    let probe = Arc::new(FixtureProbe::default());
    let server = server_with(probe.clone());

    for pid in [json!(0), json!(-5), json!("abc")] {
        let env = server
            .invoke("kill_process", json!({ "pid": pid }), CancellationToken::new())
            .await;
        assert_eq!(env.error_kind(), Some(ErrorKind::InvalidArguments));
    }
    assert_eq!(probe.kills.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn empty_launch_is_rejected_without_side_effects() {
    let probe = Arc::new(FixtureProbe::default());
    let server = server_with(probe.clone());

    let env = server
        .invoke("launch_process", json!({ "command": "" }), CancellationToken::new())
        .await;
    assert_eq!(env.error_kind(), Some(ErrorKind::InvalidArguments));
    assert!(probe.launches.lock().unwrap().is_empty());
}

#[tokio::test]
async fn launch_passes_arguments_verbatim() {
    let probe = Arc::new(FixtureProbe::default());
    let server = server_with(probe.clone());

    let env = server
        .invoke(
            "launch_process",
            json!({ "command": "echo", "args": ["a b", "$HOME"] }),
            CancellationToken::new(),
        )
        .await;

    assert_eq!(env.human_text(), "Launched process 4242: echo a b $HOME");
    let launches = probe.launches.lock().unwrap();
    assert_eq!(
        launches.as_slice(),
        &[("echo".to_string(), vec!["a b".to_string(), "$HOME".to_string()])]
    );
}

#[tokio::test]
async fn list_files_reports_entries() {
    let server = server_with(Arc::new(FixtureProbe::default()));
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("a.txt"), "a").unwrap();
    std::fs::write(dir.path().join("b.txt"), "b").unwrap();
    let path = dir.path().to_string_lossy().to_string();

    let env = server
        .invoke("list_files", json!({ "path": path }), CancellationToken::new())
        .await;
    assert_eq!(env.human_text(), format!("Files in {}:\na.txt\nb.txt", path));
    assert_eq!(
        env.structured_data().unwrap()["entries"],
        json!(["a.txt", "b.txt"])
    );

    let env = server
        .invoke(
            "list_files",
            json!({ "path": "/definitely/not/here/xyz" }),
            CancellationToken::new(),
        )
        .await;
    assert_eq!(env.error_kind(), Some(ErrorKind::PathNotFound));
}

#[tokio::test]
async fn list_files_sorted_regardless_of_creation_order() {
    let server = server_with(Arc::new(FixtureProbe::default()));
    let dir = tempfile::tempdir().unwrap();
    for name in ["zeta.log", "alpha.txt", "Mid", "beta"] {
        std::fs::write(dir.path().join(name), name).unwrap();
    }
    let path = dir.path().to_string_lossy().to_string();

    let env = server
        .invoke("list_files", json!({ "path": path }), CancellationToken::new())
        .await;
    assert_eq!(
        env.human_text(),
        format!("Files in {}:\nMid\nalpha.txt\nbeta\nzeta.log", path)
    );
}

#[tokio::test]
async fn list_files_respects_root() {
    let root = tempfile::tempdir().unwrap();
    let mut config = Config::default();
    config.files.root = Some(root.path().to_string_lossy().to_string());
    let server = server_with_config(config, Arc::new(FixtureProbe::default()));

    let env = server
        .invoke("list_files", json!({ "path": "/" }), CancellationToken::new())
        .await;
    assert_eq!(env.error_kind(), Some(ErrorKind::PermissionDenied));
}

#[tokio::test]
async fn cancelled_call_returns_cancelled() {
    let probe = FixtureProbe {
        cpu_delay: Duration::from_secs(30),
        ..Default::default()
    };
    let server = server_with(Arc::new(probe));

    let ct = CancellationToken::new();
    let trigger = ct.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(20)).await;
        trigger.cancel();
    });

    let env = server.invoke("get_cpu_usage", json!({}), ct).await;
    assert_eq!(env.error_kind(), Some(ErrorKind::Cancelled));
    assert!(env.structured_data().is_none());
}

#[tokio::test]
async fn timeout_returns_cancelled() {
    let probe = FixtureProbe {
        cpu_delay: Duration::from_secs(30),
        ..Default::default()
    };
    let mut config = Config::default();
    config.timeouts.tool_secs = 1;
    let server = server_with_config(config, Arc::new(probe));

    let env = server
        .invoke("get_cpu_usage", json!({}), CancellationToken::new())
        .await;
    assert_eq!(env.error_kind(), Some(ErrorKind::Cancelled));
}

#[tokio::test]
async fn zero_timeout_never_cancels() {
    let mut config = Config::default();
    config.timeouts.tool_secs = 0;
    let server = server_with_config(config, Arc::new(FixtureProbe::default()));

    for _ in 0..50 {
        let env = server
            .invoke("get_memory_usage", json!({}), CancellationToken::new())
            .await;
        assert!(!env.is_error(), "unexpected error: {}", env.human_text());
    }

    let slow = FixtureProbe {
        cpu_delay: Duration::from_millis(50),
        ..Default::default()
    };
    let mut config = Config::default();
    config.timeouts.tool_secs = 0;
    let server = server_with_config(config, Arc::new(slow));
    let env = server
        .invoke("get_cpu_usage", json!({}), CancellationToken::new())
        .await;
    assert_eq!(env.human_text(), "CPU Usage: 12.50%");
}

#[tokio::test]
async fn embeddable_interface() {
    let server = server_with(Arc::new(FixtureProbe::default()));

    assert_eq!(server.server_name(), "sysmon");
    assert_eq!(EmbeddableMcp::list_tools(&server).len(), ALL_TOOLS.len());

    let result = EmbeddableMcp::call_tool(&server, "get_cpu_usage", json!({}), CancellationToken::new())
        .await
        .unwrap();
    assert!(!result.is_error.unwrap_or(false));

    let failed = EmbeddableMcp::call_tool(
        &server,
        "kill_process",
        json!({ "pid": 999_999 }),
        CancellationToken::new(),
    )
    .await
    .unwrap();
    assert_eq!(failed.is_error, Some(true));

    let missing =
        EmbeddableMcp::call_tool(&server, "nope", json!({}), CancellationToken::new()).await;
    assert!(matches!(missing, Err(EmbeddableError::ToolNotFound(n)) if n == "nope"));
}
