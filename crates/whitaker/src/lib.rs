//! # whitaker
//!
//! Bidirectional Latin ↔ English lookups scraped from William Whitaker's WORDS dictionary CGI.
//!
//! One query builds a `keyword=` (Latin source) and an `english=` (English source) request,
//! fetches both concurrently over a query-scoped client, takes the first `<pre>` block of each
//! page, drops blocks carrying a "nothing found" marker, and formats the rest into a
//! [`TranslationOutcome`]. Chat transport and rendering live elsewhere.
//!
//! ```rust,no_run
//! use whitaker::{Lookup, Translator};
//!
//! async fn example() -> whitaker::Result<()> {
//!     let outcome = Lookup::default().translate("rosa").await?;
//!     for section in outcome.sections() {
//!         println!("{}:\n{}", section.label(), section.text);
//!     }
//!     Ok(())
//! }
//! ```

pub mod classify;
pub mod direction;
pub mod endpoint;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod format;
pub mod lookup;
pub mod outcome;

pub use classify::{classify, is_null_result, ClassifiedResult, Content, NULL_MARKERS};
pub use direction::{ByDirection, Direction};
pub use endpoint::{build_endpoints, EndpointSpec, Endpoints, DEFAULT_BASE_URL};
pub use error::{LookupError, ParseFailure, Result};
pub use extract::extract_block;
pub use fetch::{RawPage, Session};
pub use format::{clean_block, format_outcome, FormattedText, CODE_FENCE};
pub use lookup::{Lookup, LookupConfig, Translator};
pub use outcome::{Diagnostic, Section, TranslationOutcome};
