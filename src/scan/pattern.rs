use regex::Regex;

// Line-level grammar for a private method declaration in javap output,
// e.g. `private int bar(int, int);`. The trailing semicolon is not part of
// the match. At most one match is taken per line.
const METHOD_PATTERN: &str = r"private\s+[\w<>\[\]]+\s+\w+\(.*\)";

pub struct MethodPattern {
    regex: Regex,
}

impl MethodPattern {
    pub fn new() -> Self {
        MethodPattern {
            regex: Regex::new(METHOD_PATTERN).unwrap(),
        }
    }

    pub fn first_match<'a>(&self, line: &'a str) -> Option<&'a str> {
        self.regex.find(line).map(|m| m.as_str())
    }

    pub fn matches_in(&self, output: &str) -> Vec<String> {
        output
            .lines()
            .filter_map(|line| self.first_match(line))
            .map(|m| m.to_string())
            .collect()
    }
}

impl Default for MethodPattern {
    fn default() -> Self {
        MethodPattern::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_simple_declaration() {
        let pattern = MethodPattern::new();
        assert_eq!(
            pattern.first_match("  private int bar(int, int);"),
            Some("private int bar(int, int)")
        );
    }

    #[test]
    fn trailing_semicolon_is_excluded() {
        let pattern = MethodPattern::new();
        let matched = pattern.first_match("private void run();").unwrap();
        assert!(!matched.ends_with(';'));
        assert_eq!(matched, "private void run()");
    }

    #[test]
    fn non_private_declarations_are_rejected() {
        let pattern = MethodPattern::new();
        assert_eq!(pattern.first_match("public void run();"), None);
        assert_eq!(pattern.first_match("protected int size();"), None);
    }

    #[test]
    fn matching_is_case_sensitive() {
        let pattern = MethodPattern::new();
        assert_eq!(pattern.first_match("Private void run();"), None);
    }

    #[test]
    fn generic_and_array_return_types_match() {
        let pattern = MethodPattern::new();
        assert_eq!(
            pattern.first_match("  private List<String> names();"),
            Some("private List<String> names()")
        );
        assert_eq!(
            pattern.first_match("  private int[] counts(int n);"),
            Some("private int[] counts(int n)")
        );
    }

    #[test]
    fn at_most_one_match_per_line() {
        let pattern = MethodPattern::new();
        let line = "private int a(int) private int b(int)";
        // Greedy parameter text swallows everything up to the last paren.
        assert_eq!(pattern.matches_in(line), vec![line.to_string()]);
    }

    #[test]
    fn matches_preserve_line_order() {
        let pattern = MethodPattern::new();
        let output = "\
public class pkg.Foo {
  private void first();
  public int ignored();
  private int second(int, String);
}";
        assert_eq!(
            pattern.matches_in(output),
            vec![
                "private void first()".to_string(),
                "private int second(int, String)".to_string(),
            ]
        );
    }

    #[test]
    fn field_declarations_do_not_match() {
        let pattern = MethodPattern::new();
        assert_eq!(pattern.first_match("  private int count;"), None);
    }
}
