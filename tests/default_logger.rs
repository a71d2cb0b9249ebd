//! The slot before any registration.

#[test]
fn test_default_logger_is_usable() {
    let logger = cachelog::logger();
    assert_eq!(logger.backend(), "slog");

    // Writes one line to stderr; must not panic even with a missing error.
    logger
        .debug()
        .error_field("err", None)
        .print("dropped below the default Info level");
    cachelog::info().error_field("err", None).print("default logger line");
}
