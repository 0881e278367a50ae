use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Duration of a step timer, in seconds.
///
/// # Usage
///
/// Can be converted into [`minijinja::Value`]. If you have a `timer`, the following are valid
/// ways to use it:
///
/// ```text
/// {{ timer }}
/// {{ timer.seconds }}
/// {{ timer.minutes }}
/// ```
///
/// `{{ timer }}` renders as `1 min 32 sec`. `timer.minutes` is the whole minutes only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timer {
    /// Total length.
    pub seconds: u32,
}

impl From<u32> for Timer {
    fn from(seconds: u32) -> Self {
        Self { seconds }
    }
}

impl From<Timer> for minijinja::Value {
    fn from(value: Timer) -> Self {
        Self::from_object(value)
    }
}

impl Display for Timer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} min {} sec", self.seconds / 60, self.seconds % 60)
    }
}

impl minijinja::value::Object for Timer {
    fn repr(self: &std::sync::Arc<Self>) -> minijinja::value::ObjectRepr {
        minijinja::value::ObjectRepr::Plain
    }

    fn get_value(self: &std::sync::Arc<Self>, key: &minijinja::Value) -> Option<minijinja::Value> {
        match key.as_str()? {
            "seconds" => Some(minijinja::Value::from(self.seconds)),
            "minutes" => Some(minijinja::Value::from(self.seconds / 60)),
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
