// Shared prompt fragments and prompt-building utilities.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// Wrapper placed around a JSON Schema so the model answers with a conforming instance.
/// Replace `{schema}` before sending.
const FORMAT_INSTRUCTIONS_TEMPLATE: &str = r#"OUTPUT FORMAT:
Return a single JSON object that is a valid instance of the JSON Schema below.
- Every property listed under "required" MUST be present with the declared type.
- Properties with an "enum" MUST use one of the listed values exactly (same spelling and case).
- Each "description" explains what the property should contain.
- Arrays are ordered: put the most important items first.
- No comments, no trailing commas, no text before or after the JSON object.

JSON Schema:
```json
{schema}
```"#;

/// Instruction appended to prompts that expect a bare JSON object without a schema.
pub const JSON_OBJECT_ONLY: &str = "Respond with a single JSON object only. \
    Do NOT include any text outside the JSON object. \
    Do NOT include explanations or apologies.";

/// Builds format instructions around a serialized JSON Schema.
pub fn format_instructions(schema_json: &str) -> String {
    fill_template(FORMAT_INSTRUCTIONS_TEMPLATE, &[("schema", schema_json)])
}

/// Substitutes `{name}` placeholders in a single pass over `template`.
///
/// Inserted values are never rescanned, so caller text containing `{name}` is
/// kept verbatim. Braces that do not name a known placeholder (JSON examples in
/// a prompt, for instance) are left as they are.
pub fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let value = after.find('}').and_then(|close| {
            let name = &after[..close];
            values
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value, close))
        });

        match value {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_instructions_embeds_schema_in_fence() {
        let out = format_instructions(r#"{"type": "object"}"#);
        assert!(out.contains("```json\n{\"type\": \"object\"}\n```"));
        assert!(!out.contains("{schema}"));
    }

    #[test]
    fn test_fill_template_does_not_rescan_inserted_values() {
        let out = fill_template(
            "Title: {title}\nAsk: {ask}",
            &[("title", "Engineer {ask}"), ("ask", "shorter")],
        );
        assert_eq!(out, "Title: Engineer {ask}\nAsk: shorter");
    }

    #[test]
    fn test_fill_template_leaves_unknown_braces() {
        let out = fill_template(
            "{\n  \"jobTitles\": []\n}\n{json_only} {missing",
            &[("json_only", "JSON please")],
        );
        assert_eq!(out, "{\n  \"jobTitles\": []\n}\nJSON please {missing");
    }
}
