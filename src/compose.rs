// SPDX-License-Identifier: MIT OR Apache-2.0

//! Message composition.
//!
//! A message is composed exactly once, at the manager the caller logged on, and the
//! resulting string is handed unchanged to every backend up to the root.  The layout is
//!
//! ```text
//! <full tag> <operands joined by spaces>\n
//! <merged global data as JSON>\n          (only when there is global data)
//! ```
//!
//! The tag and the space after it are omitted when the full tag is empty.

use crate::context::{self, ContextData};
use std::fmt::{Display, Write};

/// Joins operands the way `println!("{} {} ...")` would print them: single spaces
/// between operands and one newline at the end.
pub(crate) fn join_args(args: &[&dyn Display]) -> String {
    let mut line = String::new();
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            line.push(' ');
        }
        // writing into a String cannot fail
        let _ = write!(line, "{}", arg);
    }
    line.push('\n');
    line
}

/// Builds the message delivered to backends.
pub(crate) fn compose(full_tag: &str, text: &str, global_data: &ContextData) -> String {
    let mut msg = String::with_capacity(full_tag.len() + text.len() + 2);
    if !full_tag.is_empty() {
        msg.push_str(full_tag);
        msg.push(' ');
    }
    msg.push_str(text);
    if !msg.ends_with('\n') {
        msg.push('\n');
    }
    if !global_data.is_empty() {
        msg.push_str(&context::encode(global_data));
        msg.push('\n');
    }
    msg
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn joins_with_spaces_and_newline() {
        assert_eq!(join_args(&[&"a", &"b"]), "a b\n");
        assert_eq!(join_args(&[&1, &2.5, &'c', &true]), "1 2.5 c true\n");
        assert_eq!(join_args(&[]), "\n");
    }

    #[test]
    fn tag_is_followed_by_a_space() {
        let empty = ContextData::new();
        assert_eq!(compose("[root][child]", "x y\n", &empty), "[root][child] x y\n");
        assert_eq!(compose("", "x y\n", &empty), "x y\n");
    }

    #[test]
    fn missing_newline_is_added() {
        assert_eq!(compose("", "x", &ContextData::new()), "x\n");
    }

    #[test]
    fn global_data_goes_on_its_own_line() {
        let mut data = ContextData::new();
        data.insert("key".into(), json!("value"));
        assert_eq!(compose("", "x\n", &data), "x\n{\"key\":\"value\"}\n");
        assert_eq!(compose("", "x", &data), "x\n{\"key\":\"value\"}\n");
    }
}
