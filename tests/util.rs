//! Shared test utilities for integration tests
//!
//! Provides the document corpus fixture used across test files.

#![allow(dead_code)]

use assert_fs::prelude::*;

/// Corpus with a primary document, two plain-text variants and
/// a non-document file that the scanner must skip.
pub fn make_corpus() -> assert_fs::TempDir
{
    let tmp = assert_fs::TempDir::new().expect("tempdir");

    tmp.child("main.txt")
        .write_str("Hello world\n\nGoodbye\n")
        .expect("write main");

    tmp.child("a.txt")
        .write_str("Hello world!\nSomething else\n")
        .expect("write a");

    tmp.child("b.txt")
        .write_str("Totally unrelated text here\n")
        .expect("write b");

    tmp.child("notes.log")
        .write_str("Hello world\n")
        .expect("write notes");

    tmp
}

/// Corpus whose single candidate has a paragraph longer than the display width.
pub fn make_long_paragraph_corpus() -> assert_fs::TempDir
{
    let tmp = assert_fs::TempDir::new().expect("tempdir");

    let long = "a".repeat(60);
    tmp.child("main.txt")
        .write_str(&format!("{long}\n"))
        .expect("write main");
    tmp.child("copy.txt")
        .write_str(&format!("{long}\n"))
        .expect("write copy");

    tmp
}
