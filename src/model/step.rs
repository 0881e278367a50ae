use super::Timer;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A step of the cooking guide.
///
/// The front of the step card shows the title, image, description and timer; the back shows
/// the demo and the tips.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    /// Short heading.
    pub title: String,

    /// What to do.
    #[serde(default)]
    pub description: String,

    /// Picture for the front of the card.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    /// Countdown length for this step.
    #[serde(
        default,
        rename = "timerDuration",
        skip_serializing_if = "Option::is_none"
    )]
    pub timer: Option<Timer>,

    /// Demo video or animation for the back of the card.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo_url: Option<String>,

    /// Tips for the back of the card.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tips: Vec<String>,
}

/// A [`Step`] together with its 1-based position, for templates.
///
/// # Usage
///
/// If you have a `step`, then the following are valid ways to use it.
///
/// ```text
/// {{ step }}
/// {{ step.number }}
/// {{ step.title }}
/// {{ step.description }}
/// {{ step.image_url }}
/// {{ step.timer }}
/// {{ step.demo_url }}
/// {% for tip in step.tips %}{{ tip }}{% endfor %}
/// ```
///
/// `{{ step }}` renders the number and the title, e.g. `1. Mix ingredients`. Missing optional
/// fields are undefined.
#[derive(Clone, Debug)]
pub struct NumberedStep {
    step: Step,
    number: usize,
}

impl NumberedStep {
    /// Wrap `step` as the `number`th step.
    #[must_use]
    pub fn new(step: Step, number: usize) -> Self {
        Self { step, number }
    }
}

impl From<NumberedStep> for minijinja::Value {
    fn from(value: NumberedStep) -> Self {
        Self::from_object(value)
    }
}

impl Display for NumberedStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}. {}", self.number, self.step.title)
    }
}

impl minijinja::value::Object for NumberedStep {
    fn repr(self: &std::sync::Arc<Self>) -> minijinja::value::ObjectRepr {
        minijinja::value::ObjectRepr::Plain
    }

    fn get_value(self: &std::sync::Arc<Self>, key: &minijinja::Value) -> Option<minijinja::Value> {
        match key.as_str()? {
            "number" => Some(minijinja::Value::from(self.number)),
            "title" => Some(minijinja::Value::from(&self.step.title)),
            "description" => Some(minijinja::Value::from(&self.step.description)),
            "image_url" => self.step.image_url.as_ref().map(minijinja::Value::from),
            "timer" => self.step.timer.map(minijinja::Value::from),
            "demo_url" => self.step.demo_url.as_ref().map(minijinja::Value::from),
            "tips" => Some(minijinja::Value::from(self.step.tips.clone())),
            _ => None,
        }
    }

    fn render(self: &std::sync::Arc<Self>, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    where
        Self: Sized + 'static,
    {
        self.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::tests::get_book_and_env;
    use minijinja::{Value, context};
    use test_case::test_case;

    const STEPS: &str = r#"{ "recipes": [ { "name": "Muffins", "steps": [
        { "title": "Mix ingredients", "description": "Stir together the bananas.",
          "imageUrl": "/images/mix.jpg", "timerDuration": 92,
          "demoUrl": "/demos/mix.mp4", "tips": ["Use ripe bananas.", "Don't overmix."] },
        { "title": "Combine dry ingredients" }
    ] } ] }"#;

    #[test_case(0, "{{ step }}", "1. Mix ingredients"; "display")]
    #[test_case(0, "{{ step.number }}", "1"; "number")]
    #[test_case(0, "{{ step.description }}", "Stir together the bananas."; "description")]
    #[test_case(0, "{{ step.image_url }}", "/images/mix.jpg"; "image")]
    #[test_case(0, "{{ step.timer }}", "1 min 32 sec"; "timer")]
    #[test_case(0, "{{ step.demo_url }}", "/demos/mix.mp4"; "demo")]
    #[test_case(0, "{{ step.tips | join(' ') }}", "Use ripe bananas. Don't overmix."; "tips")]
    #[test_case(1, "{{ step }}", "2. Combine dry ingredients"; "second step")]
    #[test_case(1, "{% if step.timer %}timed{% else %}untimed{% endif %}", "untimed"; "no timer")]
    #[test_case(1, "{{ step.tips | length }}", "0"; "no tips")]
    fn step(index: usize, template: &str, expected: &str) {
        let (book, env) = get_book_and_env(STEPS, template);

        let step = NumberedStep::new(book.recipes[0].steps[index].clone(), index + 1);
        let context = context! {
            step => Value::from(step)
        };

        let template = env.get_template("test").unwrap();
        assert_eq!(expected, template.render(context).unwrap());
    }

    #[test]
    fn timer_key_matches_document() {
        let (book, _) = get_book_and_env(STEPS, "");
        let written = serde_json::to_value(&book.recipes[0].steps[0]).unwrap();
        assert_eq!(written["timerDuration"], 92);
        assert_eq!(written["imageUrl"], "/images/mix.jpg");
    }
}
