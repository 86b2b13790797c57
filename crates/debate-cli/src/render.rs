//! Plain-text rendering of API responses.

use std::fmt::Write as _;

use debate_core::{
  argument::{Argument, Side},
  generate::{ArgumentDraft, GeneratedArguments},
  topic::Topic,
};

const TIMESTAMP: &str = "%Y-%m-%d %H:%M";

/// One line per topic: id, argument counts, title.
pub fn topic_line(topic: &Topic) -> String {
  format!(
    "{}  +{} -{}  {}",
    topic.id,
    topic.arguments_for.len(),
    topic.arguments_against.len(),
    topic.title
  )
}

/// Full topic with both sides and every argument's id and facts.
pub fn topic_detail(topic: &Topic) -> String {
  let mut out = String::new();
  let _ = writeln!(out, "{}", topic.title);
  let _ = writeln!(
    out,
    "id {}  created {}  updated {}",
    topic.id,
    topic.created_at.format(TIMESTAMP),
    topic.updated_at.format(TIMESTAMP)
  );
  for side in [Side::For, Side::Against] {
    let _ = writeln!(out);
    let label: &str = side.as_ref();
    let _ = writeln!(out, "{}:", label.to_uppercase());
    let arguments = topic.arguments(side);
    if arguments.is_empty() {
      let _ = writeln!(out, "  (none)");
    }
    for (i, argument) in arguments.iter().enumerate() {
      write_argument(&mut out, i + 1, argument);
    }
  }
  out
}

fn write_argument(out: &mut String, n: usize, argument: &Argument) {
  let _ = writeln!(out, "  {n}. {}  [{}]", argument.point, argument.id);
  for fact in &argument.supporting_facts {
    let _ = writeln!(out, "     - {fact}");
  }
}

pub fn generated(set: &GeneratedArguments) -> String {
  let mut out = String::new();
  let _ = writeln!(out, "Suggestions for: {}", set.topic);
  for (label, drafts) in [("FOR", &set.arguments_for), ("AGAINST", &set.arguments_against)] {
    let _ = writeln!(out);
    let _ = writeln!(out, "{label}:");
    for (i, draft) in drafts.iter().enumerate() {
      write_draft(&mut out, i + 1, draft);
    }
  }
  out
}

fn write_draft(out: &mut String, n: usize, draft: &ArgumentDraft) {
  let _ = writeln!(out, "  {n}. {}", draft.point);
  for fact in &draft.supporting_facts {
    let _ = writeln!(out, "     - {fact}");
  }
}
