//! Registration and use of the process-wide logger.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread;

use cachelog::config::{BackendKind, ConfigError, LoggingConfig};
use cachelog::{DiscardLogger, RecordLogger, Severity, SharedBuffer, SlogLogger};
use slog::o;

mod common;
use common::{log_engine, slog_engine, test_error, PEER};

/// Tests in this file share the process-wide slot.
static SLOT: Mutex<()> = Mutex::new(());

fn lock_slot() -> MutexGuard<'static, ()> {
    SLOT.lock().unwrap_or_else(PoisonError::into_inner)
}

fn log_peer_error() {
    let err = test_error();
    cachelog::logger()
        .error()
        .error_field("err", Some(&err))
        .string_field("key", "keyValue")
        .string_field("category", "groupcache")
        .emit(format_args!("error retrieving key from peer {}", PEER));
}

#[test]
fn test_registered_slog_matches_native() {
    let _guard = lock_slot();
    let (root, buffer) = slog_engine();
    let host = root.new(o!("ContextKey" => "ContextVal"));

    cachelog::set_logger(SlogLogger::new(host.clone()));
    log_peer_error();
    let interface_out = buffer.take();

    let native = host
        .new(o!("err" => test_error().to_string()))
        .new(o!("key" => "keyValue"))
        .new(o!("category" => "groupcache"));
    slog::error!(native, "error retrieving key from peer {}", PEER);
    let native_out = buffer.take();

    assert_eq!(interface_out, native_out);
    assert!(interface_out.contains("ContextKey: ContextVal"));
}

#[test]
fn test_registered_log_backend_emits_scenario() {
    let _guard = lock_slot();
    let (engine, buffer) = log_engine();

    cachelog::set_logger(RecordLogger::new(engine, "groupcache"));
    log_peer_error();

    let lines = buffer.lines();
    assert_eq!(lines.len(), 1);
    let line = &lines[0];
    assert!(line.contains("ERROR"));
    assert!(line.contains("error retrieving key from peer http://127.0.0.1:8080"));
    assert!(line.contains("err=test error"));
    assert!(line.contains("key=keyValue"));
    assert!(line.contains("category=groupcache"));
}

#[test]
fn test_set_logger_returns_previous() {
    let _guard = lock_slot();
    let (engine, _buffer) = log_engine();

    cachelog::set_logger(DiscardLogger);
    let previous = cachelog::set_logger(RecordLogger::new(engine, "groupcache"));

    assert_eq!(previous.backend(), "discard");
    assert_eq!(cachelog::logger().backend(), "log");
}

#[test]
fn test_replacement_is_not_retroactive() {
    let _guard = lock_slot();
    let (old_engine, old_buffer) = log_engine();
    let (new_engine, new_buffer) = log_engine();

    cachelog::set_logger(RecordLogger::new(old_engine, "groupcache"));
    let in_flight = cachelog::warn().string_field("stage", "before swap");

    cachelog::set_logger(RecordLogger::new(new_engine, "groupcache"));
    in_flight.print("finished after swap");
    cachelog::info().print("fresh statement");

    assert_eq!(old_buffer.lines().len(), 1);
    assert!(old_buffer.contents().contains("finished after swap"));
    assert_eq!(new_buffer.lines().len(), 1);
    assert!(new_buffer.contents().contains("fresh statement"));
}

#[test]
fn test_concurrent_swap_and_log() {
    let _guard = lock_slot();
    const STATEMENTS: usize = 500;

    let (first_engine, first) = log_engine();
    let (second_engine, second) = log_engine();
    let first_logger = RecordLogger::new(first_engine, "groupcache");
    let second_logger = RecordLogger::new(second_engine, "groupcache");
    cachelog::set_logger(first_logger.clone());

    let done = Arc::new(AtomicBool::new(false));
    let swapper = {
        let done = Arc::clone(&done);
        thread::spawn(move || {
            let mut flip = false;
            while !done.load(Ordering::SeqCst) {
                if flip {
                    cachelog::set_logger(first_logger.clone());
                } else {
                    cachelog::set_logger(second_logger.clone());
                }
                flip = !flip;
                thread::yield_now();
            }
        })
    };

    let writer = thread::spawn(|| {
        for i in 0..STATEMENTS {
            cachelog::info()
                .string_field("seq", &i.to_string())
                .emit(format_args!("tick {}", i));
        }
    });

    writer.join().unwrap();
    done.store(true, Ordering::SeqCst);
    swapper.join().unwrap();

    let lines: Vec<String> = first.lines().into_iter().chain(second.lines()).collect();
    assert_eq!(lines.len(), STATEMENTS);
    assert!(lines.iter().all(|l| l.contains("INFO") && l.contains("tick ")));

    let mut seen: Vec<usize> = lines
        .iter()
        .filter_map(|l| l.rsplit("seq=").next())
        .filter_map(|s| s.trim().parse().ok())
        .collect();
    seen.sort_unstable();
    assert_eq!(seen, (0..STATEMENTS).collect::<Vec<_>>());
}

#[test]
fn test_init_from_config() {
    let _guard = lock_slot();

    let config = LoggingConfig {
        backend: BackendKind::Discard,
        ..LoggingConfig::default()
    };
    cachelog::init(&config).unwrap();
    assert_eq!(cachelog::logger().backend(), "discard");

    let invalid = LoggingConfig {
        backend: BackendKind::Log,
        target: String::new(),
        ..LoggingConfig::default()
    };
    let err = cachelog::init(&invalid).unwrap_err();
    assert!(matches!(err, ConfigError::Validation(_)));
    assert_eq!(cachelog::logger().backend(), "discard", "failed init keeps the active logger");
}

#[test]
fn test_free_functions_select_severity() {
    let _guard = lock_slot();
    let buffer = SharedBuffer::new();
    let root = SlogLogger::text_root(buffer.clone(), Severity::Debug, false);
    cachelog::set_logger(SlogLogger::new(root));

    cachelog::debug().print("d");
    cachelog::info().print("i");
    cachelog::warn().print("w");
    cachelog::error().print("e");

    let lines = buffer.lines();
    assert_eq!(lines.len(), 4);
    for (line, level) in lines.iter().zip(["DEBG", "INFO", "WARN", "ERRO"]) {
        assert!(line.contains(level), "{line}");
    }
}
