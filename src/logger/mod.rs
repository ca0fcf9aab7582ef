//! Logger module
//!
//! Provides logging utilities for the service including:
//! - Server lifecycle logging
//! - Access logging with multiple formats
//! - Error and warning logging
//! - File-based logging support

mod format;
pub mod writer;

pub use format::AccessLogEntry;

use crate::config::{Config, LogLevel};
use std::net::SocketAddr;

/// Initialize the logger with configuration
///
/// Should be called once at application startup.
pub fn init(config: &Config) -> std::io::Result<()> {
    let level = config
        .log_level()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
    writer::init(
        level,
        config.logging.access_log_file.as_deref(),
        config.logging.error_log_file.as_deref(),
    )
}

/// Before `init()` everything is printed
fn enabled(level: LogLevel) -> bool {
    writer::get().map_or(true, |w| level <= w.level())
}

/// Write to info/access log
fn write_info(level: LogLevel, message: &str) {
    if !enabled(level) {
        return;
    }
    match writer::get() {
        Some(w) => w.write_info(message),
        None => println!("{message}"),
    }
}

/// Write to error log
fn write_error(level: LogLevel, message: &str) {
    if !enabled(level) {
        return;
    }
    match writer::get() {
        Some(w) => w.write_error(message),
        None => eprintln!("{message}"),
    }
}

/// Write to access log specifically
fn write_access(message: &str) {
    match writer::get() {
        Some(w) => w.write_access(message),
        None => println!("{message}"),
    }
}

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    write_info(LogLevel::Info, "======================================");
    write_info(LogLevel::Info, "numserve started successfully");
    write_info(LogLevel::Info, &format!("Listening on: http://{addr}"));
    write_info(LogLevel::Info, &format!("Log level: {}", config.logging.level));
    if let Some(workers) = config.server.workers {
        write_info(LogLevel::Info, &format!("Worker threads: {workers}"));
    }
    if let Some(ref path) = config.logging.access_log_file {
        write_info(LogLevel::Info, &format!("Access log: {path}"));
    }
    if let Some(ref path) = config.logging.error_log_file {
        write_info(LogLevel::Info, &format!("Error log: {path}"));
    }
    write_info(LogLevel::Info, "  - GET /factorial?n=<int>");
    write_info(LogLevel::Info, "  - GET /fibonacci/<int>");
    write_info(LogLevel::Info, "  - GET /mean  (JSON array body)");
    write_info(LogLevel::Info, "======================================\n");
}

pub fn log_effective_config(config: &Config) {
    if !enabled(LogLevel::Debug) {
        return;
    }
    match config.to_toml() {
        Ok(rendered) => write_info(LogLevel::Debug, &format!("[CONFIG] Effective configuration:\n{rendered}")),
        Err(e) => log_warning(&format!("Failed to render configuration: {e}")),
    }
}

pub fn log_shutdown(active_connections: usize) {
    write_info(
        LogLevel::Info,
        &format!("[Shutdown] Listener closed, {active_connections} connection(s) still finishing"),
    );
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    write_info(LogLevel::Debug, &format!("[Connection] Accepted from: {peer_addr}"));
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    write_error(LogLevel::Error, &format!("[ERROR] Failed to serve connection: {err:?}"));
}

pub fn log_error(message: &str) {
    write_error(LogLevel::Error, &format!("[ERROR] {message}"));
}

pub fn log_warning(message: &str) {
    write_error(LogLevel::Warn, &format!("[WARN] {message}"));
}

pub fn log_signal(message: &str) {
    write_info(LogLevel::Info, &format!("[SIGNAL] {message}"));
}

/// Log a rejected request at debug level
pub fn log_rejected(path: &str, status: u16, detail: &str) {
    write_info(LogLevel::Debug, &format!("[Rejected] {path} - {status}: {detail}"));
}

/// Log formatted access log entry
pub fn log_access(entry: &AccessLogEntry, format: &str) {
    write_access(&entry.format(format));
}
