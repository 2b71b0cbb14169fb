// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Apply a [`StyleToken`] to everything written to a writer for a while.
//!
//! There are two shapes:
//! 1. [`StyleToken::begin_scope`] returns a [`StyleGuard`]. Call [`StyleGuard::end`]
//!    to close it and see the I/O result. If the guard is dropped instead (early
//!    return, `?`, panic) the terminator is still written, errors ignored.
//! 2. [`StyleToken::scoped`] takes the body as a closure.
//!
//! Either way the terminator goes out exactly once. Inert tokens write nothing.

use std::io::{self, Write};

use crate::StyleToken;

#[derive(Debug)]
pub struct StyleGuard<'a, W: Write> {
    writer: &'a mut W,
    terminator: String,
    ended: bool,
}

impl<W: Write> StyleGuard<'_, W> {
    /// The writer the scope applies to.
    pub fn writer(&mut self) -> &mut W { &mut *self.writer }

    /// Writes the terminator and closes the scope.
    ///
    /// # Errors
    ///
    /// Returns the I/O error from writing the terminator.
    pub fn end(mut self) -> io::Result<()> { self.write_terminator() }

    fn write_terminator(&mut self) -> io::Result<()> {
        if self.ended {
            return Ok(());
        }
        self.ended = true;
        self.writer.write_all(self.terminator.as_bytes())
    }
}

impl<W: Write> Drop for StyleGuard<'_, W> {
    fn drop(&mut self) {
        if let Err(error) = self.write_terminator() {
            tracing::warn!(message = "Could not write style terminator", error = %error);
        }
    }
}

impl StyleToken {
    /// Writes [`StyleToken::render`] to `writer` and returns the guard that will write
    /// the terminator.
    ///
    /// # Errors
    ///
    /// Returns the I/O error from writing the opening sequence. No guard exists in that
    /// case, so nothing else is written.
    pub fn begin_scope<'a, W: Write>(
        &self,
        writer: &'a mut W,
    ) -> io::Result<StyleGuard<'a, W>> {
        writer.write_all(self.render().as_bytes())?;
        Ok(StyleGuard {
            writer,
            terminator: self.render_terminator(),
            ended: false,
        })
    }

    /// Runs `body` between the opening sequence and the terminator.
    ///
    /// # Errors
    ///
    /// Returns the I/O error from writing either sequence. Errors from `body` itself
    /// are part of `R`, for the caller to handle.
    pub fn scoped<W: Write, R>(
        &self,
        writer: &mut W,
        body: impl FnOnce(&mut W) -> R,
    ) -> io::Result<R> {
        let mut guard = self.begin_scope(writer)?;
        let result = body(guard.writer());
        guard.end()?;
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use std::{io::Write,
              panic::{AssertUnwindSafe, catch_unwind}};

    use pretty_assertions::assert_eq;

    use crate::{Category, SgrCode, StyleToken};

    fn green() -> StyleToken {
        StyleToken::new("green", Category::Foreground, [SgrCode::Plain(32)])
    }

    fn as_text(bytes: Vec<u8>) -> String {
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_begin_scope_end() {
        let mut out = Vec::new();
        let mut guard = green().begin_scope(&mut out).unwrap();
        write!(guard.writer(), "go").unwrap();
        guard.end().unwrap();
        assert_eq!(as_text(out), "\x1b[32mgo\x1b[39m");
    }

    #[test]
    fn test_drop_writes_terminator_once() {
        let mut out = Vec::new();
        {
            let mut guard = green().begin_scope(&mut out).unwrap();
            write!(guard.writer(), "go").unwrap();
        }
        assert_eq!(as_text(out), "\x1b[32mgo\x1b[39m");
    }

    #[test]
    fn test_scoped_closure() {
        let mut out = Vec::new();
        let len = green()
            .scoped(&mut out, |w| {
                w.write_all(b"abc").unwrap();
                3
            })
            .unwrap();
        assert_eq!(len, 3);
        assert_eq!(as_text(out), "\x1b[32mabc\x1b[39m");
    }

    #[test]
    fn test_scoped_early_return_from_body() {
        fn body(w: &mut Vec<u8>) -> Result<(), &'static str> {
            w.extend_from_slice(b"partial");
            Err("bail")?;
            w.extend_from_slice(b"never");
            Ok(())
        }
        let mut out = Vec::new();
        let result = green().scoped(&mut out, body).unwrap();
        assert_eq!(result, Err("bail"));
        assert_eq!(as_text(out), "\x1b[32mpartial\x1b[39m");
    }

    #[test]
    fn test_panic_in_scope_still_terminates() {
        fn explode(w: &mut Vec<u8>) {
            w.extend_from_slice(b"boom");
            panic!("body failed");
        }
        let mut out = Vec::new();
        let result = catch_unwind(AssertUnwindSafe(|| green().scoped(&mut out, explode)));
        assert!(result.is_err());
        assert_eq!(as_text(out), "\x1b[32mboom\x1b[39m");
    }

    #[test]
    fn test_inert_scope_writes_nothing() {
        let mut out = Vec::new();
        StyleToken::inert()
            .scoped(&mut out, |w| w.extend_from_slice(b"plain"))
            .unwrap();
        assert_eq!(as_text(out), "plain");
    }
}
