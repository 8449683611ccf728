//! A streaming, allocation-free parser for DEC-compatible terminal escape
//! sequences, following Paul Williams' VT500-series state machine.
//!
//! ```
//! use otty_vtparse::{Action, Callback, Parser, ParserView};
//!
//! struct Printer;
//!
//! impl Callback for Printer {
//!     fn dispatch(&mut self, view: &ParserView<'_>, action: Action, code_point: u32) {
//!         if action == Action::Print {
//!             for ch in view.print_buf() {
//!                 print!("{ch}");
//!             }
//!         }
//!     }
//! }
//!
//! let mut parser = Parser::new(Printer);
//! parser.feed_bytes(b"hello, \x1b[1mworld\x1b[0m");
//! ```

mod callback;
mod config;
mod enums;
mod parser;
mod print;
mod tables;
mod utf8;

pub use callback::{Callback, ParserView, UnknownAction};
pub use config::Utf8Mode;
pub use enums::{Action, State};
pub use parser::{Parser, MAX_INTERMEDIATES, MAX_PARAMS};
