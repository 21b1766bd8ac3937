//! Static course catalog
//!
//! Course metadata for the browser. Names double as level seeds, so the
//! spelling here is load-bearing: renaming a course changes its layout.

use std::fmt;

use serde::Serialize;

use crate::error::CatalogError;
use Requirement::{Special, StarGate, Stars, Unknown};

/// Star requirement to unlock a course
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Requirement {
    Stars(u32),
    /// Star count shown with its unit ("20 Stars")
    StarGate(u32),
    /// Non-numeric unlock condition (e.g. "SR")
    Special(&'static str),
    /// Not listed
    Unknown,
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `pad` so width/alignment flags apply
        match self {
            Requirement::Stars(n) => f.pad(&n.to_string()),
            Requirement::StarGate(n) => f.pad(&format!("{n} Stars")),
            Requirement::Special(s) => f.pad(s),
            Requirement::Unknown => f.pad(MISSING),
        }
    }
}

/// Placeholder for missing values in rows
const MISSING: &str = "–";

/// A playable course
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Course {
    pub name: &'static str,
    pub stars: u32,
    pub requirement: Requirement,
    pub acts: Option<u32>,
    pub coins: Option<u32>,
}

impl Course {
    const fn new(name: &'static str, stars: u32, requirement: Requirement, coins: u32) -> Self {
        Self {
            name,
            stars,
            requirement,
            acts: None,
            coins: Some(coins),
        }
    }

    /// Fixed-width row for list display
    pub fn to_row(&self) -> String {
        let acts = self.acts.map_or_else(|| MISSING.to_string(), |a| a.to_string());
        let coins = self.coins.map_or_else(|| MISSING.to_string(), |c| c.to_string());
        format!(
            "{:<26}  ⭐ {:<2}  Req: {:<9}  Acts: {:<3}  Coins: {}",
            self.name, self.stars, self.requirement, acts, coins
        )
    }
}

/// Browser categories, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    Main,
    Secret,
    Boss,
    Overworld,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Main,
        Category::Secret,
        Category::Boss,
        Category::Overworld,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Main => "Main Courses",
            Category::Secret => "Secret Courses",
            Category::Boss => "Boss Worlds",
            Category::Overworld => "Overworlds",
        }
    }

    pub fn courses(&self) -> &'static [Course] {
        match self {
            Category::Main => MAIN_COURSES,
            Category::Secret => SECRET_COURSES,
            Category::Boss => BOSS_WORLDS,
            Category::Overworld => OVERWORLDS,
        }
    }

    /// Next category, wrapping
    pub fn next(&self) -> Category {
        let i = Self::ALL.iter().position(|c| c == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }
}

pub static MAIN_COURSES: &[Course] = &[
    Course::new("Bob-omb Islands", 7, Stars(0), 147),
    Course::new("Sky Land Resort", 7, Unknown, 156),
    Course::new("Piranha Plant Pond", 7, Unknown, 151),
    Course::new("Chuckya Harbor", 7, Stars(8), 202),
    Course::new("Gloomy Garden", 7, Stars(8), 139),
    Course::new("Colorful Coral Caverns", 7, Stars(20), 137),
    Course::new("Koopa Canyon", 7, Stars(30), 152),
    Course::new("Large Leaf Forest", 7, Stars(20), 132),
    Course::new("Mad Musical Mess", 7, Stars(30), 154),
    Course::new("Melting Snow Peaks", 7, Stars(20), 184),
    Course::new("Colossal Candy Clutter", 7, Stars(40), 211),
    Course::new("Cloudrail Station", 7, Unknown, 205),
    Course::new("Fatal Flame Falls", 7, Unknown, 152),
    Course::new("Bob-omb Battle Factory", 7, Stars(65), 165),
    Course::new("Starlight Runway", 7, Unknown, 169),
];

pub static SECRET_COURSES: &[Course] = &[
    Course::new("Mushroom Mountain Town", 3, Stars(0), 68),
    Course::new("Creepy Cap Cave", 2, Stars(8), 37),
    Course::new("Puzzle of the Vanish Cap", 1, Special("SR"), 28),
    Course::new("Sandy Slide Secret", 3, Stars(20), 85),
    Course::new("Windy Wing Cap Well", 2, Stars(40), 70),
    Course::new("Hidden Palace Finale", 1, Stars(120), 20),
];

pub static BOSS_WORLDS: &[Course] = &[
    Course::new("Bowser's Slippery Swamp", 1, StarGate(20), 90),
    Course::new("Bowser's Retro Remix Castle", 1, StarGate(40), 51),
    Course::new("Bowser's Rainbow Rumble", 1, StarGate(80), 56),
];

pub static OVERWORLDS: &[Course] = &[
    Course::new("Star Leap Tower Grounds", 2, Stars(0), 4),
    Course::new("Star Leap Tower Interior", 0, StarGate(20), 2),
    Course::new("Flowpipe Sewers", 1, Unknown, 19),
    Course::new("Star Leap Tower First Floor", 0, StarGate(40), 0),
    Course::new("Star Road", 1, StarGate(65), 28),
    Course::new("Star Leap Tower Grounds (Night)", 0, StarGate(80), 0),
    Course::new("0-Life Area (DEATH)", 0, Unknown, 0),
];

/// Look up a course by exact name in any category
pub fn find_course(name: &str) -> Option<&'static Course> {
    Category::ALL
        .iter()
        .flat_map(|c| c.courses().iter())
        .find(|c| c.name == name)
}

/// Look up a course, failing for names outside the catalog
pub fn require_course(name: &str) -> Result<&'static Course, CatalogError> {
    find_course(name).ok_or_else(|| CatalogError::UnknownCourse(name.to_string()))
}
