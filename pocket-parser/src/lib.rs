//! # pocket-parser
//!
//! Parsers for the plain-text course and quiz files that seed the ParivaarPocket lessons.
//!
//! File Layout
//!
//!     The source material is loosely structured text: one file per course module and one
//!     file per quiz. Nothing about it is a grammar, so parsing is split in two small passes
//!     that can be tested on their own:
//!
//!     src/pocket
//!       ├── lexing       Line classification (heading, option, marker, plain text)
//!       ├── token        Option tokenizer run over the text of one question block
//!       ├── parsing      Course parser and the quiz state machine
//!       ├── records      The records handed to emitters
//!       ├── loader       Directory scanning into a Catalog
//!       └── testing      Fluent assertions over parsed quizzes
//!
//!     Parsing never fails. Missing options, missing answer markers or odd file names all
//!     resolve to documented defaults. Only reading the files can fail, see [pocket::loader].

pub mod pocket;
