//! Question catalogues: display labels for one-liner and story keys
//!
//! Keys are stable identifiers stored in profile JSON. Labels are what the
//! card shows above the quote. Lookups never fail; unknown keys get a
//! generic label.

/// Label used for an unmapped one-liner key, and as the card prompt
/// when a profile falls back to a default quote
pub const DEFAULT_ONE_LINER_LABEL: &str = "攀岩對你來說是什麼？";

/// Label used for an unmapped story key
pub const DEFAULT_STORY_LABEL: &str = "攀岩故事";

/// One-liners shown first on cards, in this order.
///
/// Hand-maintained: keys added to the catalogue later are ranked with the
/// remaining keys (lexicographically) until listed here.
pub const CARD_QUESTION_PRIORITY: &[&str] = &[
    "climbing_meaning",
    "climbing_origin",
    "advice_to_self",
    "best_moment",
    "favorite_place",
];

pub const ONE_LINER_QUESTIONS: &[(&str, &str)] = &[
    ("climbing_origin", "你與攀岩的相遇"),
    ("climbing_meaning", "攀岩對你來說是什麼？"),
    ("advice_to_self", "給剛開始攀岩的自己"),
    ("best_moment", "爬岩最爽的是？"),
    ("favorite_place", "最喜歡在哪裡爬？"),
    ("current_goal", "目前的攀岩目標"),
    ("climbing_style_desc", "你的攀岩風格"),
];

pub const STORY_QUESTIONS: &[(&str, &str)] = &[
    ("climbing_origin_story", "你與攀岩的故事"),
    ("memorable_route", "最難忘的一條路線"),
    ("climbing_philosophy", "攀岩教會你的事"),
    ("community_story", "岩友之間的故事"),
    ("injury_recovery", "受傷與復原的經歷"),
    ("memorable_moment", "最難忘的攀岩時刻"),
    ("biggest_challenge", "最大的挑戰"),
    ("breakthrough_story", "突破的故事"),
    ("first_outdoor", "第一次戶外攀岩"),
    ("first_grade", "第一次完成的難度"),
    ("frustrating_climb", "最挫折的一次"),
    ("fear_management", "如何面對恐懼"),
    ("climbing_lesson", "攀岩教會我的事"),
    ("failure_perspective", "如何看待失敗"),
    ("flow_moment", "心流時刻"),
    ("life_balance", "攀岩與生活的平衡"),
    ("unexpected_gain", "意外的收穫"),
    ("climbing_mentor", "攀岩導師"),
    ("climbing_partner", "攀岩夥伴"),
    ("funny_moment", "有趣的攀岩經歷"),
    ("favorite_spot", "最愛的攀岩地點"),
    ("advice_to_group", "給岩友的建議"),
    ("climbing_space", "攀岩的空間"),
    ("training_method", "訓練方式"),
    ("effective_practice", "有效的練習"),
    ("technique_tip", "技巧心得"),
    ("gear_choice", "裝備選擇"),
    ("dream_climb", "夢想中的路線"),
    ("climbing_trip", "攀岩旅行"),
    ("bucket_list_story", "願望清單"),
    ("climbing_goal", "攀岩目標"),
    ("climbing_style", "攀岩風格"),
    ("climbing_inspiration", "攀岩的啟發"),
    ("life_outside_climbing", "攀岩以外的生活"),
];

/// A topical grouping of story questions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoryCategory {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

pub const STORY_CATEGORIES: &[StoryCategory] = &[
    StoryCategory {
        id: "growth",
        name: "成長與突破",
        description: "紀錄攀岩路上的重要時刻",
    },
    StoryCategory {
        id: "psychology",
        name: "心理與哲學",
        description: "探索攀岩帶來的內在轉變",
    },
    StoryCategory {
        id: "community",
        name: "社群與連結",
        description: "分享與岩友們的故事",
    },
    StoryCategory {
        id: "practical",
        name: "實用分享",
        description: "傳承實用的經驗與技巧",
    },
    StoryCategory {
        id: "dreams",
        name: "夢想與探索",
        description: "描繪攀岩的夢想藍圖",
    },
    StoryCategory {
        id: "life",
        name: "生活整合",
        description: "攀岩之外的你",
    },
];

fn lookup(table: &[(&str, &'static str)], key: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, label)| *label)
}

/// Display label for a one-liner key
pub fn one_liner_label(key: &str) -> &'static str {
    lookup(ONE_LINER_QUESTIONS, key).unwrap_or(DEFAULT_ONE_LINER_LABEL)
}

/// Display label for a story key
pub fn story_label(key: &str) -> &'static str {
    lookup(STORY_QUESTIONS, key).unwrap_or(DEFAULT_STORY_LABEL)
}

pub fn story_category(id: &str) -> Option<&'static StoryCategory> {
    STORY_CATEGORIES.iter().find(|c| c.id == id)
}

pub fn is_priority_key(key: &str) -> bool {
    CARD_QUESTION_PRIORITY.contains(&key)
}
