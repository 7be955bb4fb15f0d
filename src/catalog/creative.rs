// Creative outlet catalog: poems, affirmations and art ideas

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::SolaceError;
use crate::matcher::{choose, RandomSource};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CreativeKind {
    Poem,
    Affirmation,
    ArtIdea,
}

impl CreativeKind {
    pub const ALL: [CreativeKind; 3] = [
        CreativeKind::Poem,
        CreativeKind::Affirmation,
        CreativeKind::ArtIdea,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CreativeKind::Poem => "poem",
            CreativeKind::Affirmation => "affirmation",
            CreativeKind::ArtIdea => "art-idea",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            CreativeKind::Poem => "Uplifting Poem",
            CreativeKind::Affirmation => "Daily Affirmation",
            CreativeKind::ArtIdea => "Creative Art Idea",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            CreativeKind::Poem => "Let AI create a personalized poem to brighten your day",
            CreativeKind::Affirmation => "Receive powerful affirmations for self-love and growth",
            CreativeKind::ArtIdea => "Get inspired with therapeutic art and craft suggestions",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            CreativeKind::Poem => "📝",
            CreativeKind::Affirmation => "💙",
            CreativeKind::ArtIdea => "🎨",
        }
    }

    /// Candidate templates for this kind
    pub fn templates(&self) -> &'static [CreativeTemplate] {
        match self {
            CreativeKind::Poem => &POEMS,
            CreativeKind::Affirmation => &AFFIRMATIONS,
            CreativeKind::ArtIdea => &ART_IDEAS,
        }
    }
}

impl fmt::Display for CreativeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CreativeKind {
    type Err = SolaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "poem" => Ok(CreativeKind::Poem),
            "affirmation" => Ok(CreativeKind::Affirmation),
            "art-idea" | "art" | "art_idea" => Ok(CreativeKind::ArtIdea),
            other => Err(SolaceError::UnknownContentType(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreativeTemplate {
    pub title: &'static str,
    pub body: &'static str,
    pub tag: &'static str,
}

/// A generated piece of creative content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreativeContent {
    pub kind: CreativeKind,
    pub title: String,
    pub body: String,
    pub tag: String,
}

impl CreativeContent {
    fn from_template(kind: CreativeKind, template: &CreativeTemplate) -> Self {
        Self {
            kind,
            title: template.title.to_string(),
            body: template.body.to_string(),
            tag: template.tag.to_string(),
        }
    }

    /// Plain-text form used when sharing or copying
    pub fn share_text(&self) -> String {
        format!("{}\n\n{}", self.title, self.body)
    }
}

/// Draw one item of `kind` uniformly at random
pub fn generate(kind: CreativeKind, rng: &mut dyn RandomSource) -> CreativeContent {
    let templates = kind.templates();
    let template = choose(rng, templates).unwrap_or(&templates[0]);
    CreativeContent::from_template(kind, template)
}

static POEMS: [CreativeTemplate; 2] = [
    CreativeTemplate {
        title: "Seeds of Strength",
        body: "In the garden of your heart,\nSeeds of strength lie waiting.\nWith each breath, with each new start,\nYour soul keeps on creating.\n\nThrough storms and gentle rain,\nYou grow in ways unseen.\nEach struggle, each small pain,\nMakes you beautifully keen.\n\nSo bloom where you are planted,\nShine bright with inner light.\nYour worth is never granted,\nIt's yours by sacred right. 🌱",
        tag: "Empowerment",
    },
    CreativeTemplate {
        title: "Gentle Waves",
        body: "Like waves upon the shore,\nEmotions come and go.\nSome crash, some whisper more,\nAll have wisdom to bestow.\n\nDon't fight the changing tide,\nLet feelings flow through you.\nWith patience as your guide,\nCalm waters will renew.\n\nYou are the endless ocean,\nVast, deep, and ever free.\nIn stillness and in motion,\nPerfectly you will be. 🌊",
        tag: "Mindfulness",
    },
];

static AFFIRMATIONS: [CreativeTemplate; 2] = [
    CreativeTemplate {
        title: "I Am Enough Affirmation",
        body: "I am enough, exactly as I am today.\nI honor my feelings and give myself permission to feel them fully.\nI am worthy of love, kindness, and compassion.\nMy journey is unique and valid.\nI choose to be gentle with myself as I grow.\nEvery small step forward is progress worth celebrating.\nI trust in my ability to navigate life's challenges.\nI am resilient, I am brave, I am loved. 💙",
        tag: "Self-Love",
    },
    CreativeTemplate {
        title: "Growth Mindset Affirmation",
        body: "I embrace challenges as opportunities to grow.\nMy mistakes are lessons that help me become wiser.\nI celebrate my progress, no matter how small.\nI am learning to trust the process of my life.\nDifficult moments are temporary, but my strength is permanent.\nI choose curiosity over judgment.\nI am becoming the person I am meant to be.\nEvery day, I am writing a beautiful story. 🌟",
        tag: "Growth",
    },
];

static ART_IDEAS: [CreativeTemplate; 2] = [
    CreativeTemplate {
        title: "Emotion Color Journal",
        body: "Create a daily emotion color wheel! 🎨\n\n• Get a blank journal or large paper\n• Each day, choose colors that represent your feelings\n• Paint, draw, or color in abstract shapes\n• No rules - let your emotions guide the colors\n• Add words, symbols, or patterns if you feel like it\n• Over time, you'll see beautiful patterns of your emotional journey\n\nThis helps process feelings and creates something beautiful from every emotion! 🌈",
        tag: "Therapeutic Art",
    },
    CreativeTemplate {
        title: "Gratitude Collage",
        body: "Make a gratitude vision board that celebrates YOU! ✨\n\n• Gather magazines, printed photos, or draw your own images\n• Cut out things that make you smile or feel grateful\n• Include: favorite places, activities, people, dreams, positive words\n• Arrange them on poster board or in a journal\n• Add your own doodles, stickers, or decorative elements\n• Place it somewhere you'll see it daily\n\nThis creates a visual reminder of all the good in your life! 🙏",
        tag: "Mindfulness Art",
    },
];
