//! Screen state of a recipe walkthrough.
//!
//! The walkthrough starts on the start screen, can show the ingredients, and then steps through
//! the recipe one card at a time. Each card has a front (instructions and timer) and a back
//! (demo and tips). Time is driven from outside: call [`Walkthrough::tick`] once per second.
use crate::model::{Recipe, Step};

/// Which screen is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum View {
    /// Recipe start screen.
    #[default]
    Start,
    /// Ingredients checklist.
    Ingredients,
    /// Step-by-step guide.
    Steps,
}

/// Which side of the step card is up.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Card {
    /// Instructions and timer.
    #[default]
    Front,
    /// Demo and tips.
    Back,
}

/// Format a remaining time as `"{m} min {s} sec left"`. Nothing is shown once time is up.
///
/// ```
/// use recipe_walkthrough::walkthrough::format_time;
///
/// assert_eq!(format_time(92).as_deref(), Some("1 min 32 sec left"));
/// assert_eq!(format_time(0), None);
/// ```
#[must_use]
pub fn format_time(seconds: u32) -> Option<String> {
    if seconds == 0 {
        return None;
    }
    Some(format!("{} min {} sec left", seconds / 60, seconds % 60))
}

/// Countdown for a single step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Countdown {
    remaining: u32,
    active: bool,
}

impl Countdown {
    /// A countdown of `seconds`; it runs right away unless `seconds` is zero.
    #[must_use]
    pub fn new(seconds: u32) -> Self {
        Self {
            remaining: seconds,
            active: seconds > 0,
        }
    }

    /// Count one second down. Stops itself when it reaches zero.
    pub fn tick(&mut self) {
        if self.active && self.remaining > 0 {
            self.remaining -= 1;
        }
        if self.remaining == 0 {
            self.active = false;
        }
    }

    /// Stop counting without losing the remaining time.
    pub fn pause(&mut self) {
        self.active = false;
    }

    /// Continue counting, if there is time left.
    pub fn resume(&mut self) {
        self.active = self.remaining > 0;
    }

    /// Seconds left.
    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Whether ticks count down.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Text for the timer display, see [`format_time`].
    #[must_use]
    pub fn label(&self) -> Option<String> {
        format_time(self.remaining)
    }
}

/// State of a walkthrough over one recipe.
#[derive(Clone, Debug)]
pub struct Walkthrough<'r> {
    recipe: &'r Recipe,
    view: View,
    step_index: usize,
    card: Card,
    timer: Countdown,
}

impl<'r> Walkthrough<'r> {
    /// Start a walkthrough on the start screen, positioned on the first step.
    #[must_use]
    pub fn new(recipe: &'r Recipe) -> Self {
        let mut walkthrough = Self {
            recipe,
            view: View::Start,
            step_index: 0,
            card: Card::Front,
            timer: Countdown::default(),
        };
        walkthrough.enter_step(0);
        walkthrough
    }

    fn enter_step(&mut self, index: usize) {
        self.step_index = index;
        self.card = Card::Front;
        self.timer = Countdown::new(
            self.current_step()
                .and_then(|step| step.timer)
                .map_or(0, |timer| timer.seconds),
        );
    }

    /// The recipe being walked through.
    #[must_use]
    pub fn recipe(&self) -> &'r Recipe {
        self.recipe
    }

    /// The screen showing.
    #[must_use]
    pub fn view(&self) -> View {
        self.view
    }

    /// Go to the ingredients screen.
    pub fn show_ingredients(&mut self) {
        self.view = View::Ingredients;
    }

    /// Go to the step guide, from either the start or the ingredients screen.
    pub fn start_cooking(&mut self) {
        self.view = View::Steps;
    }

    /// Return to the start screen.
    pub fn back_to_start(&mut self) {
        self.view = View::Start;
    }

    /// Current step, `None` for a recipe without steps.
    #[must_use]
    pub fn current_step(&self) -> Option<&'r Step> {
        self.recipe.steps.get(self.step_index)
    }

    /// 1-based number of the current step.
    #[must_use]
    pub fn step_number(&self) -> usize {
        self.step_index + 1
    }

    /// Number of steps in the recipe.
    #[must_use]
    pub fn total_steps(&self) -> usize {
        self.recipe.steps.len()
    }

    /// Move to the next step. Returns `false` on the last step.
    pub fn next_step(&mut self) -> bool {
        if self.step_index + 1 >= self.total_steps() {
            return false;
        }
        self.enter_step(self.step_index + 1);
        true
    }

    /// Move to the previous step. Returns `false` on the first step.
    pub fn previous_step(&mut self) -> bool {
        if self.step_index == 0 {
            return false;
        }
        self.enter_step(self.step_index - 1);
        true
    }

    /// Turn the step card over.
    pub fn flip(&mut self) {
        self.card = match self.card {
            Card::Front => Card::Back,
            Card::Back => Card::Front,
        };
    }

    /// Side of the step card that is up.
    #[must_use]
    pub fn card(&self) -> Card {
        self.card
    }

    /// Timer of the current step.
    #[must_use]
    pub fn timer(&self) -> &Countdown {
        &self.timer
    }

    /// Timer of the current step, for pausing and resuming.
    pub fn timer_mut(&mut self) -> &mut Countdown {
        &mut self.timer
    }

    /// One second passed. Only the step guide's timer runs.
    pub fn tick(&mut self) {
        if self.view == View::Steps {
            self.timer.tick();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::bundled_book;

    fn muffins() -> &'static Recipe {
        bundled_book().find("Hummingbird Muffins").unwrap()
    }

    #[test]
    fn starts_on_start_screen() {
        let walkthrough = Walkthrough::new(muffins());
        assert_eq!(walkthrough.view(), View::Start);
        assert_eq!(walkthrough.step_number(), 1);
        assert_eq!(walkthrough.total_steps(), 3);
        assert_eq!(walkthrough.card(), Card::Front);
    }

    #[test]
    fn views() {
        let mut walkthrough = Walkthrough::new(muffins());
        walkthrough.show_ingredients();
        assert_eq!(walkthrough.view(), View::Ingredients);
        walkthrough.back_to_start();
        assert_eq!(walkthrough.view(), View::Start);
        walkthrough.show_ingredients();
        walkthrough.start_cooking();
        assert_eq!(walkthrough.view(), View::Steps);
    }

    #[test]
    fn navigation_is_clamped() {
        let mut walkthrough = Walkthrough::new(muffins());
        assert!(!walkthrough.previous_step());
        assert!(walkthrough.next_step());
        assert!(walkthrough.next_step());
        assert_eq!(walkthrough.step_number(), 3);
        assert!(!walkthrough.next_step());
        assert_eq!(walkthrough.step_number(), 3);
        assert!(walkthrough.previous_step());
        assert_eq!(
            walkthrough.current_step().map(|step| step.title.as_str()),
            Some("Combine dry ingredients")
        );
    }

    #[test]
    fn moving_resets_card_and_timer() {
        let mut walkthrough = Walkthrough::new(muffins());
        walkthrough.start_cooking();
        walkthrough.flip();
        assert_eq!(walkthrough.card(), Card::Back);
        walkthrough.tick();
        assert_eq!(walkthrough.timer().remaining(), 91);

        walkthrough.next_step();
        assert_eq!(walkthrough.card(), Card::Front);
        assert_eq!(walkthrough.timer().label(), None);
        assert!(!walkthrough.timer().is_active());

        walkthrough.previous_step();
        assert_eq!(walkthrough.timer().remaining(), 92);
    }

    #[test]
    fn timer_only_runs_on_steps() {
        let mut walkthrough = Walkthrough::new(muffins());
        walkthrough.tick();
        assert_eq!(walkthrough.timer().remaining(), 92);
        walkthrough.start_cooking();
        walkthrough.tick();
        assert_eq!(
            walkthrough.timer().label().as_deref(),
            Some("1 min 31 sec left")
        );
    }

    #[test]
    fn paused_timer_ignores_ticks() {
        let mut walkthrough = Walkthrough::new(muffins());
        walkthrough.start_cooking();
        walkthrough.timer_mut().pause();
        walkthrough.tick();
        assert_eq!(walkthrough.timer().remaining(), 92);
        walkthrough.timer_mut().resume();
        walkthrough.tick();
        assert_eq!(walkthrough.timer().remaining(), 91);
    }

    #[test]
    fn flip_twice() {
        let mut walkthrough = Walkthrough::new(muffins());
        walkthrough.flip();
        walkthrough.flip();
        assert_eq!(walkthrough.card(), Card::Front);
    }

    #[test]
    fn recipe_without_steps() {
        let recipe = Recipe {
            name: "Water".into(),
            description: None,
            image_url: None,
            servings: 1,
            ingredients: Vec::new(),
            steps: Vec::new(),
        };
        let mut walkthrough = Walkthrough::new(&recipe);
        assert!(walkthrough.current_step().is_none());
        assert!(!walkthrough.next_step());
        assert!(!walkthrough.previous_step());
        assert_eq!(walkthrough.timer().remaining(), 0);
    }

    #[test]
    fn countdown_runs_out() {
        let mut countdown = Countdown::new(2);
        assert!(countdown.is_active());
        countdown.tick();
        assert_eq!(countdown.label().as_deref(), Some("0 min 1 sec left"));
        countdown.tick();
        assert_eq!(countdown.remaining(), 0);
        assert!(!countdown.is_active());
        assert_eq!(countdown.label(), None);
        countdown.tick();
        assert_eq!(countdown.remaining(), 0);
    }

    #[test]
    fn countdown_pause_resume() {
        let mut countdown = Countdown::new(10);
        countdown.pause();
        countdown.tick();
        assert_eq!(countdown.remaining(), 10);
        countdown.resume();
        countdown.tick();
        assert_eq!(countdown.remaining(), 9);
    }

    #[test]
    fn zero_countdown_never_runs() {
        let mut countdown = Countdown::new(0);
        assert!(!countdown.is_active());
        countdown.resume();
        assert!(!countdown.is_active());
    }

    #[test]
    fn format_time_minutes_and_seconds() {
        assert_eq!(format_time(92).as_deref(), Some("1 min 32 sec left"));
        assert_eq!(format_time(59).as_deref(), Some("0 min 59 sec left"));
        assert_eq!(format_time(1200).as_deref(), Some("20 min 0 sec left"));
        assert_eq!(format_time(0), None);
    }
}
