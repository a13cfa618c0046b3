//! Integration tests for the full conversion pipeline.

use wp_readme::{convert, ConvertOptions, Converter};

#[test]
fn test_full_document_round_trip() {
    let input = r#"# Sample Plugin

<!-- only:github/ -->
[![Build](https://example.com/badge.svg)](https://example.com)
<!-- /only:github -->

A sample plugin that does one thing well.

## Installation

1. Upload the plugin folder.
2. Activate it from the Plugins screen.

<!-- only:wp>
Rate us on the plugin directory!
</only:wp -->

### Usage

```php
add_action( 'init', 'sample_plugin_init' );
```
"#;

    let expected = r#"=== Sample Plugin ===



A sample plugin that does one thing well.

== Installation ==

1. Upload the plugin folder.
2. Activate it from the Plugins screen.

Rate us on the plugin directory!

= Usage =

<pre>add_action( 'init', 'sample_plugin_init' );</pre>
"#;

    let converted = convert(input, &ConvertOptions::new());

    // Compare line by line, ignoring trailing whitespace differences
    let converted_lines: Vec<&str> = converted.lines().map(|l| l.trim_end()).collect();
    let expected_lines: Vec<&str> = expected.lines().map(|l| l.trim_end()).collect();

    assert_eq!(converted_lines.len(), expected_lines.len());
    for (i, (got, want)) in converted_lines.iter().zip(&expected_lines).enumerate() {
        assert_eq!(got, want, "line {} mismatch", i + 1);
    }
}

#[test]
fn test_environment_sections_collapse() {
    let input = "\
## Changelog

<!-- only:production>
= 2.1.0 =
* Stable release.
</only:production -->

<!-- not:production/ -->
This nightly build is unsupported.
<!-- /not:production -->
";
    let options = ConvertOptions::new().with_env("production");
    let converted = convert(input, &options);

    assert!(converted.contains("== Changelog =="));
    assert!(converted.contains("= 2.1.0 ="));
    assert!(converted.contains("* Stable release."));
    assert!(!converted.contains("nightly"));
    assert!(!converted.contains("only:production"));
    assert!(!converted.contains("not:production"));
}

#[test]
fn test_unset_environment_keeps_markers() {
    let input = "<!-- only:production>\nhidden\n</only:production -->\n";
    let converted = convert(input, &ConvertOptions::new());
    assert_eq!(converted, input);
}

#[test]
fn test_converter_is_reusable() {
    let converter = Converter::new(ConvertOptions::new().with_env("production"));
    assert_eq!(converter.convert("# A"), "=== A ===");
    assert_eq!(converter.convert("## B"), "== B ==");
}
