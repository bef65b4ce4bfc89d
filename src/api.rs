//! Caller-facing API: context accumulation and per-severity log statements.
//!
//! Every log statement is the same composition: gate on the resolved
//! logger's threshold, normalize the call-site arguments, merge them over
//! the context state, forward any diagnostics at error severity, and hand
//! the result to the backend. Gating runs first, so a filtered statement
//! costs one atomic load and produces no diagnostics.

use crate::context::Context;
use kvlog_core::{merge, normalize, Diagnostic, Field, Level, RawArg};
use kvlog_sink::Logger;

/// Build a `Vec<RawArg>` from a mixed argument list.
///
/// ```
/// use kvlog::{args, Field, RawArg};
///
/// let err = std::io::Error::other("boom");
/// let raw = args!["attempt", 3, Field::new("host", "db"), RawArg::err(err)];
/// ```
#[macro_export]
macro_rules! args {
    ($($arg:expr),* $(,)?) => {
        vec![$($crate::RawArg::from($arg)),*]
    };
}

// ---------------------------------------------------------------------------
// Context accumulation
// ---------------------------------------------------------------------------

/// Add fields to the context, returning a derived context.
///
/// Empty `raw_args` is a true no-op: the returned context shares the input's
/// state and no new snapshot is created. Otherwise the new fields are merged
/// over the existing state, so a later add overrides an earlier one by name —
/// the same rule as call-time merging.
pub fn add_fields(ctx: &Context, raw_args: Vec<RawArg>) -> Context {
    if raw_args.is_empty() {
        return ctx.clone();
    }

    let normalized = normalize(raw_args);
    emit_diagnostics(&ctx.logger(), &normalized.diagnostics);

    let merged = merge(ctx.fields().to_vec(), normalized.fields);
    ctx.with_field_state(merged)
}

/// Resolve the final field sequence for one log statement: context state
/// merged with the normalized call-site arguments.
///
/// Cost is proportional to the number of fields involved, never to context
/// depth. Diagnostics are returned for the caller to forward.
pub fn resolve_fields(ctx: &Context, raw_args: Vec<RawArg>) -> (Vec<Field>, Vec<Diagnostic>) {
    let normalized = normalize(raw_args);
    let merged = merge(ctx.fields().to_vec(), normalized.fields);
    (merged, normalized.diagnostics)
}

fn emit_diagnostics(logger: &Logger, diagnostics: &[Diagnostic]) {
    // Always at error severity, never gated: malformed logging input must
    // surface even when the offending statement's own level is filtered.
    for diagnostic in diagnostics {
        logger.log(Level::Error, diagnostic.message(), diagnostic.fields());
    }
}

// ---------------------------------------------------------------------------
// Gated log statements
// ---------------------------------------------------------------------------

fn log_at(ctx: &Context, level: Level, message: &str, raw_args: Vec<RawArg>) {
    let logger = ctx.logger();
    if !logger.enabled(level) {
        return;
    }
    let (fields, diagnostics) = resolve_fields(ctx, raw_args);
    emit_diagnostics(&logger, &diagnostics);
    logger.log(level, message, fields);
}

pub fn debug(ctx: &Context, message: &str, raw_args: Vec<RawArg>) {
    log_at(ctx, Level::Debug, message, raw_args);
}

pub fn info(ctx: &Context, message: &str, raw_args: Vec<RawArg>) {
    log_at(ctx, Level::Info, message, raw_args);
}

pub fn warn(ctx: &Context, message: &str, raw_args: Vec<RawArg>) {
    log_at(ctx, Level::Warn, message, raw_args);
}

pub fn error(ctx: &Context, message: &str, raw_args: Vec<RawArg>) {
    log_at(ctx, Level::Error, message, raw_args);
}

// ---------------------------------------------------------------------------
// Terminating log statements
// ---------------------------------------------------------------------------

/// The effect a terminating log statement asks its wrapper to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    Exit(i32),
    Unwind,
}

/// Emit a fatal/panic record unconditionally (no level gating) and return
/// the termination effect the caller must perform.
///
/// Split from [`fatal`] and [`panic`] so the emission half stays testable.
pub fn emit_terminating(
    ctx: &Context,
    level: Level,
    message: &str,
    raw_args: Vec<RawArg>,
) -> Termination {
    let logger = ctx.logger();
    let (fields, diagnostics) = resolve_fields(ctx, raw_args);
    emit_diagnostics(&logger, &diagnostics);
    logger.log(level, message, fields);
    logger.flush();

    match level {
        Level::Panic => Termination::Unwind,
        _ => Termination::Exit(1),
    }
}

fn perform(termination: Termination, message: &str) -> ! {
    match termination {
        Termination::Exit(code) => std::process::exit(code),
        Termination::Unwind => panic!("{message}"),
    }
}

/// Log at fatal severity and exit the process.
pub fn fatal(ctx: &Context, message: &str, raw_args: Vec<RawArg>) -> ! {
    perform(emit_terminating(ctx, Level::Fatal, message, raw_args), message)
}

/// Log at panic severity and unwind.
pub fn panic(ctx: &Context, message: &str, raw_args: Vec<RawArg>) -> ! {
    perform(emit_terminating(ctx, Level::Panic, message, raw_args), message)
}
