//! Narrative slideshow
//!
//! A story is a fixed list of lines advanced one at a time. Certain lines
//! award stars or tint the scene when they are reached.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How a trigger changes the star counter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StarEffect {
    Add(u32),
    Set(u32),
}

/// Ground colour cue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GroundTint {
    Blue,
    Gold,
}

/// Effect fired when `index` becomes the current line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarTrigger {
    pub index: usize,
    pub effect: StarEffect,
    pub tint: Option<GroundTint>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Story {
    pub title: &'static str,
    pub lines: &'static [&'static str],
    pub triggers: &'static [StarTrigger],
    /// Shown after advancing past the last line; without one the story
    /// finishes on its last line.
    pub ending: Option<&'static str>,
}

/// Which built-in story to play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum StoryId {
    PowerStars,
    StarRoad,
}

impl StoryId {
    pub fn story(&self) -> &'static Story {
        match self {
            StoryId::PowerStars => &POWER_STARS,
            StoryId::StarRoad => &STAR_ROAD,
        }
    }
}

/// Something the presentation layer should react to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoryEvent {
    LineShown { index: usize },
    StarsChanged { count: u32 },
    GroundTinted(GroundTint),
    /// Prompt should be hidden; nothing further happens
    Finished,
}

/// Playback position and counters for one story
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryProgress {
    pub index: usize,
    pub stars: u32,
    pub tint: Option<GroundTint>,
    pub finished: bool,
    /// Ending line is on screen
    pub showing_ending: bool,
}

impl StoryProgress {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text currently on screen
    pub fn current_line(&self, story: &Story) -> &'static str {
        if self.showing_ending {
            if let Some(ending) = story.ending {
                return ending;
            }
        }
        story.lines.get(self.index).copied().unwrap_or_default()
    }

    /// Whether the "press space" prompt is visible
    pub fn prompt_visible(&self) -> bool {
        !self.finished
    }

    /// Advance one line, returning what changed
    pub fn advance(&mut self, story: &Story) -> Vec<StoryEvent> {
        let mut events = Vec::new();
        if self.finished {
            return events;
        }

        let last = story.lines.len().saturating_sub(1);
        if self.index >= last {
            // Only reachable for stories with an ending line
            self.showing_ending = story.ending.is_some();
            self.finished = true;
            events.push(StoryEvent::Finished);
            log::info!("Story '{}' finished with {} stars", story.title, self.stars);
            return events;
        }

        self.index += 1;
        events.push(StoryEvent::LineShown { index: self.index });

        for trigger in story.triggers.iter().filter(|t| t.index == self.index) {
            self.stars = match trigger.effect {
                StarEffect::Add(n) => self.stars + n,
                StarEffect::Set(n) => n,
            };
            events.push(StoryEvent::StarsChanged { count: self.stars });
            if let Some(tint) = trigger.tint {
                self.tint = Some(tint);
                events.push(StoryEvent::GroundTinted(tint));
            }
        }

        if self.index == last && story.ending.is_none() {
            self.finished = true;
            events.push(StoryEvent::Finished);
            log::info!("Story '{}' finished with {} stars", story.title, self.stars);
        }

        events
    }
}

pub static POWER_STARS: Story = Story {
    title: "Power Stars",
    lines: &[
        "Mario finds himself in a strange new world, seeking Power Stars.",
        "A towering fortress stands before him under the twilight sky.",
        "Enemies lurk around, but Mario presses on with determination.",
        "He navigates treacherous paths and narrow ledges with skill.",
        "At the fortress summit, a fierce Goomba King challenges Mario!",
        "Defeated, the Goomba King drops a shining Power Star at Mario's feet.",
        "With a cheer, Mario claims the Power Star, feeling stronger.",
        "A distant gate opens, revealing a new area for Mario to explore.",
        "Mario gathers 8 Red Coins hidden around the fortress grounds.",
        "The Red Coins' energy forms a Power Star above an ancient pedestal.",
        "Mario leaps high and secures the newly formed Power Star in triumph.",
        "A rumble shakes the world – Bowser's laugh echoes in the distance.",
        "Mario races through the opened gate toward Bowser's looming castle.",
        "In the grand hall, Bowser confronts Mario for a final showdown.",
        "With courage and agility, Mario overcomes Bowser's tricks and traps.",
        "Bowser yields, and the final Grand Star appears for Mario to grab.",
    ],
    triggers: &[
        StarTrigger { index: 5, effect: StarEffect::Add(1), tint: None },
        StarTrigger { index: 8, effect: StarEffect::Add(1), tint: None },
        StarTrigger { index: 9, effect: StarEffect::Add(1), tint: None },
        StarTrigger { index: 15, effect: StarEffect::Add(1), tint: None },
    ],
    ending: None,
};

pub static STAR_ROAD: Story = Story {
    title: "Super Mario Star Road",
    lines: &[
        "Yoshi: Mario! Bowser has found the secret to get to the Star Road, the kingdom of the Star Spirits!",
        "Yoshi: Using the power of the Power Stars, he's transporting his troops all over the Mushroom Kingdom!",
        "Yoshi: You must collect enough Power Stars to break the seal and reach the Star Road!",
        "~ You begin your adventure, leaping through paintings and pipes into new worlds... ~",
        "~ After a perilous journey through a swamp, you face... the Pernicious Piranha Plant! ~",
        "~ You defeat the foul flower! You've collected 40 Stars! ~",
        "~ Your adventure continues into a nostalgic and challenging castle in the sky... ~",
        "~ Atop the castle, you challenge the Blueberry Bully and send him flying! ~",
        "~ Victory! You've collected 80 Stars! The seal to the Star Road is weakening... ~",
        "~ With 120 Stars collected, a celestial path opens before you... ~",
        "~ You've reached the Star Road! Bowser's Sky Base floats menacingly ahead. ~",
        "~ The final battle! You face Bowser himself in a chaotic showdown among the stars... ~",
        "~ You've defeated Bowser! The Star Road is safe once more! ~",
        "Princess Peach: Oh, Mario! Thank you! You've saved the Mushroom Kingdom and the Star Spirits!",
        "Princess Peach: For your bravery, please accept this special Power Star! ~",
        "~ YOU GOT A STAR! Total Stars: 121 ~",
        "Narrator: A new challenge has appeared! A Star Replica is now hidden in each secret course...",
        "Narrator: Can you find all 130 Stars? The adventure continues! (Thanks for playing!)",
    ],
    triggers: &[
        StarTrigger { index: 5, effect: StarEffect::Set(40), tint: None },
        StarTrigger { index: 8, effect: StarEffect::Set(80), tint: None },
        StarTrigger { index: 9, effect: StarEffect::Set(120), tint: Some(GroundTint::Blue) },
        StarTrigger { index: 15, effect: StarEffect::Set(121), tint: Some(GroundTint::Gold) },
    ],
    ending: Some("The End. ROM Hack by Skelux, Fan Game by You!"),
};

#[cfg(test)]
mod tests {
    use super::*;

    fn play_to_end(story: &Story) -> (StoryProgress, Vec<StoryEvent>) {
        let mut progress = StoryProgress::new();
        let mut all = Vec::new();
        for _ in 0..story.lines.len() + 5 {
            all.extend(progress.advance(story));
        }
        (progress, all)
    }

    #[test]
    fn test_power_stars_counts() {
        let mut progress = StoryProgress::new();
        for _ in 0..4 {
            progress.advance(&POWER_STARS);
        }
        assert_eq!(progress.stars, 0);

        let events = progress.advance(&POWER_STARS);
        assert_eq!(progress.index, 5);
        assert!(events.contains(&StoryEvent::StarsChanged { count: 1 }));

        let (done, _) = play_to_end(&POWER_STARS);
        assert_eq!(done.stars, 4);
        assert_eq!(done.index, 15);
        assert!(done.finished);
        assert!(!done.prompt_visible());
        assert_eq!(
            done.current_line(&POWER_STARS),
            "Bowser yields, and the final Grand Star appears for Mario to grab."
        );
    }

    #[test]
    fn test_power_stars_finishes_on_last_line() {
        let mut progress = StoryProgress::new();
        for _ in 0..14 {
            progress.advance(&POWER_STARS);
        }
        assert!(!progress.finished);
        let events = progress.advance(&POWER_STARS);
        assert_eq!(events.last(), Some(&StoryEvent::Finished));
        assert!(progress.advance(&POWER_STARS).is_empty());
    }

    #[test]
    fn test_star_road_sets_counts_and_tints() {
        let (done, events) = play_to_end(&STAR_ROAD);
        let counts: Vec<u32> = events
            .iter()
            .filter_map(|e| match e {
                StoryEvent::StarsChanged { count } => Some(*count),
                _ => None,
            })
            .collect();
        assert_eq!(counts, vec![40, 80, 120, 121]);
        assert!(events.contains(&StoryEvent::GroundTinted(GroundTint::Blue)));
        assert_eq!(done.tint, Some(GroundTint::Gold));
        assert_eq!(done.stars, 121);
    }

    #[test]
    fn test_star_road_ending_line() {
        let mut progress = StoryProgress::new();
        for _ in 0..17 {
            progress.advance(&STAR_ROAD);
        }
        assert!(!progress.finished);
        assert!(progress.prompt_visible());

        let events = progress.advance(&STAR_ROAD);
        assert_eq!(events, vec![StoryEvent::Finished]);
        assert_eq!(
            progress.current_line(&STAR_ROAD),
            "The End. ROM Hack by Skelux, Fan Game by You!"
        );
        assert!(!progress.prompt_visible());
    }

    #[test]
    fn test_story_id_parse() {
        assert_eq!(StoryId::from_str("Star-Road", true), Ok(StoryId::StarRoad));
        assert_eq!(StoryId::from_str("power-stars", false), Ok(StoryId::PowerStars));
        assert!(StoryId::from_str("bowser", true).is_err());
    }
}
