//! Normalize free-text name fields into one canonical display form.
//!
//! Two independent, pure transforms, each a fixed-order pipeline of
//! text-rewrite stages over a single input string:
//!
//! - [`canonicalize_org_name`] — organization/company names: parenthetical
//!   asides, trade-name (DBA) clauses, legal-entity suffixes, and leading
//!   articles are stripped, then casing is normalized with acronym and
//!   connector-word exceptions.
//! - [`extract_first_name`] — person "first name" fields: nicknames,
//!   honorifics, initials, and generational suffixes are resolved down to
//!   the one preferred first name.
//!
//! Both functions are total: any input, including `None`, comes back as a
//! plain `String` (possibly empty), never an error. There is no shared or
//! per-call state, so they are safe to call from any number of threads.
//!
//! ```
//! use clean_names::{canonicalize_org_name, extract_first_name};
//!
//! assert_eq!(canonicalize_org_name(Some("Acme Corp (formerly XYZ), Inc.")), "Acme");
//! assert_eq!(canonicalize_org_name(Some("at&t inc.")), "AT&T");
//! assert_eq!(extract_first_name(Some("Robert \"Bob\" Smith")), "Bob");
//! assert_eq!(extract_first_name(Some("Dr. Jane Smith")), "Dr. Jane");
//! assert_eq!(canonicalize_org_name(None), "");
//! ```

mod casing;
mod org;
mod person;
mod vocab;

pub use org::canonicalize_org_name;
pub use person::extract_first_name;
