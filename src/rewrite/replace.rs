use crate::endpoints::{ADHERENCE_PATTERN, ADHERENCE_REPLACEMENT, REPLACEMENTS};
use crate::error::{ApifixError, Result};
use regex::Regex;

/// The replacement pass, with the one regex rule compiled up front.
#[derive(Debug)]
pub struct RewriteRules {
	/// Compiled parameterized-path rule.
	adherence: Regex,
}

impl RewriteRules {
	/// Compile the regex special case. The table itself needs no compilation.
	pub fn compile() -> Result<Self> {
		let adherence =
			Regex::new(ADHERENCE_PATTERN).map_err(|source| ApifixError::InvalidRegex {
				pattern: ADHERENCE_PATTERN.to_string(),
				source,
			})?;
		Ok(RewriteRules { adherence })
	}

	/// Apply every replacement rule to `content`.
	///
	/// Table pairs are applied in order; a pair whose literal occurs in the
	/// text has every occurrence replaced and counts once toward the returned
	/// count (matched rules, not occurrences). The parameterized adherence
	/// rule runs unconditionally afterwards and is not counted.
	///
	/// Returns the substituted text and the matched-rule count. The caller
	/// decides whether to persist by comparing against the input.
	pub fn apply(&self, content: &str) -> (String, usize) {
		let mut text = content.to_string();
		let mut rules_matched = 0;

		for (old, new) in REPLACEMENTS {
			if text.contains(old) {
				text = text.replace(old, new);
				rules_matched += 1;
			}
		}

		let text = self.adherence.replace_all(&text, ADHERENCE_REPLACEMENT);

		(text.into_owned(), rules_matched)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn rules() -> RewriteRules {
		RewriteRules::compile().unwrap()
	}

	#[test]
	fn test_single_literal_replaced() {
		let (out, count) = rules().apply("fetch('/api/auth/me')");
		assert_eq!(out, "fetch(API_ENDPOINTS.AUTH.ME)");
		assert_eq!(count, 1);
	}

	#[test]
	fn test_every_occurrence_replaced_counted_once() {
		let input = "a('/api/cart/count'); b('/api/cart/count'); c('/api/cart/count');";
		let (out, count) = rules().apply(input);
		assert!(!out.contains("'/api/cart/count'"));
		assert_eq!(out.matches("API_ENDPOINTS.CART.COUNT").count(), 3);
		assert_eq!(count, 1);
	}

	#[test]
	fn test_count_is_matched_rules() {
		let input = "fetch('/api/auth/me');\nfetch('/api/auth/me');\nfetch('/api/cart/count');\n";
		let (_, count) = rules().apply(input);
		assert_eq!(count, 2);
	}

	#[test]
	fn test_all_table_literals_replaced() {
		for (old, new) in REPLACEMENTS {
			let input = format!("axios.get({old})");
			let (out, count) = rules().apply(&input);
			assert_eq!(out, format!("axios.get({new})"));
			assert_eq!(count, 1);
		}
	}

	#[test]
	fn test_adherence_rewritten_to_concatenation() {
		let input = "fetch('/api/medicine-reminders/adherence?period=weekly')";
		let (out, count) = rules().apply(input);
		assert_eq!(
			out,
			"fetch(API_ENDPOINTS.MEDICINE_REMINDERS.ADHERENCE + '?period=weekly')"
		);
		// The regex special case is not reflected in the count.
		assert_eq!(count, 0);
	}

	#[test]
	fn test_untouched_text_comes_back_identical() {
		let input = "const answer = 42;\nfetch('/api/unknown/path');\n";
		let (out, count) = rules().apply(input);
		assert_eq!(out, input);
		assert_eq!(count, 0);
	}

	#[test]
	fn test_second_pass_is_a_noop() {
		let input = "fetch('/api/auth/signin');\nfetch('/api/medicine-reminders/adherence?period=weekly');\n";
		let (once, _) = rules().apply(input);
		let (twice, count) = rules().apply(&once);
		assert_eq!(twice, once);
		assert_eq!(count, 0);
	}

	#[test]
	fn test_base_literal_does_not_eat_longer_paths() {
		// '/api/medicine-requests' must not fire inside the /all variant;
		// the closing quote on the key keeps the shorter rule out.
		let input = "fetch('/api/medicine-requests/all')";
		let (out, _) = rules().apply(input);
		assert_eq!(out, "fetch(API_ENDPOINTS.MEDICINE_REQUESTS.ALL)");
	}
}
