use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Activity {
    pub title: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub icon: &'static str,
    pub duration: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct TierProfile {
    pub title: &'static str,
    pub description: &'static str,
    pub activities: &'static [Activity; 4],
}

impl Tier {
    pub fn profile(self) -> &'static TierProfile {
        match self {
            Tier::Low => &GENTLE_CARE,
            Tier::Medium => &BALANCED_WELLNESS,
            Tier::High => &POSITIVE_ENERGY,
        }
    }
}

static GENTLE_CARE: TierProfile = TierProfile {
    title: "Gentle Care",
    description: "Take it easy with these nurturing activities",
    activities: &[
        Activity {
            title: "Mindful Breathing",
            description: "Try a 5-minute breathing exercise to center yourself",
            category: "Relaxation",
            icon: "🧘‍♀️",
            duration: "5 min",
        },
        Activity {
            title: "Gentle Walk",
            description: "A short walk outside can boost your mood naturally",
            category: "Exercise",
            icon: "🚶‍♀️",
            duration: "10-15 min",
        },
        Activity {
            title: "Gratitude Practice",
            description: "Write down 3 things you're grateful for today",
            category: "Mindfulness",
            icon: "📝",
            duration: "5 min",
        },
        Activity {
            title: "Call a Friend",
            description: "Connect with someone who makes you feel supported",
            category: "Social",
            icon: "📞",
            duration: "15-30 min",
        },
    ],
};

static BALANCED_WELLNESS: TierProfile = TierProfile {
    title: "Balanced Wellness",
    description: "Maintain your emotional equilibrium",
    activities: &[
        Activity {
            title: "Meditation Session",
            description: "Try a guided meditation to find inner peace",
            category: "Mindfulness",
            icon: "🧘",
            duration: "10-20 min",
        },
        Activity {
            title: "Creative Expression",
            description: "Draw, write, or engage in any creative activity",
            category: "Creativity",
            icon: "🎨",
            duration: "20-30 min",
        },
        Activity {
            title: "Nature Time",
            description: "Spend time outdoors in a natural setting",
            category: "Nature",
            icon: "🌳",
            duration: "30+ min",
        },
        Activity {
            title: "Yoga Flow",
            description: "Gentle yoga to connect mind and body",
            category: "Exercise",
            icon: "🤸‍♀️",
            duration: "15-30 min",
        },
    ],
};

static POSITIVE_ENERGY: TierProfile = TierProfile {
    title: "Positive Energy",
    description: "Channel your good vibes into meaningful activities",
    activities: &[
        Activity {
            title: "Share Your Joy",
            description: "Spread positivity by helping or encouraging others",
            category: "Social",
            icon: "💖",
            duration: "Variable",
        },
        Activity {
            title: "Energy Workout",
            description: "Channel your positive energy into exercise",
            category: "Exercise",
            icon: "💪",
            duration: "30-45 min",
        },
        Activity {
            title: "Plan Something Fun",
            description: "Organize an activity you're excited about",
            category: "Planning",
            icon: "📅",
            duration: "15-20 min",
        },
        Activity {
            title: "Practice Mindfulness",
            description: "Savor this positive moment with awareness",
            category: "Mindfulness",
            icon: "✨",
            duration: "10 min",
        },
    ],
};
