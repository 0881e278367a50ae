use crate::scaler::scale;

/// Scale a quantity string, e.g. `{{ "1/2 cup" | scale(2) }}` renders `1 cup`.
pub fn scale_filter(value: &str, ratio: f64) -> String {
    scale(value, ratio)
}

#[cfg(test)]
mod tests {
    use super::*;
    use minijinja::Environment;
    use test_case::test_case;

    #[test_case(r#"{{ "1/2 cup" | scale(2) }}"#, "1 cup"; "integer ratio")]
    #[test_case(r#"{{ "3/4 tsp" | scale(0.5) }}"#, "3/8 tsp"; "float ratio")]
    #[test_case(r#"{{ "to taste" | scale(3) }}"#, "to taste"; "text only")]
    fn scale_in_template(template: &str, expected: &str) {
        let mut env = Environment::new();
        env.add_filter("scale", scale_filter);
        assert_eq!(env.render_str(template, ()).unwrap(), expected);
    }
}
