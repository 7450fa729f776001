//! Built-in script templates
//!
//! A template supplies the opening blocks of a new script and the system
//! prompt used for AI generation on scripts created from it.

use crate::model::{BlockType, ScriptLanguage};

use BlockType::{Action, Character, Dialogue, Parenthetical, SceneHeading, Transition};

pub const DEFAULT_TEMPLATE_ID: &str = "standard";

type TemplateBlocks = &'static [(BlockType, &'static str)];

#[derive(Debug)]
pub struct ScriptTemplate {
    pub id: &'static str,
    pub name: &'static str,
    /// Persona handed to the text generator
    pub system_prompt: &'static str,
    pub blocks_en: TemplateBlocks,
    pub blocks_zh: Option<TemplateBlocks>,
}

impl ScriptTemplate {
    /// Opening blocks for a script in `language`
    pub fn initial_blocks(&self, language: ScriptLanguage) -> TemplateBlocks {
        match (language, self.blocks_zh) {
            (ScriptLanguage::Zh | ScriptLanguage::Dual, Some(zh)) => zh,
            _ => self.blocks_en,
        }
    }
}

/// Look up a template by id, falling back to the standard template
pub fn find(id: &str) -> &'static ScriptTemplate {
    TEMPLATES
        .iter()
        .find(|t| t.id == id)
        .unwrap_or(&TEMPLATES[0])
}

/// Template for a script's `template_id`, if any
pub fn for_script(template_id: Option<&str>) -> &'static ScriptTemplate {
    find(template_id.unwrap_or(DEFAULT_TEMPLATE_ID))
}

pub static TEMPLATES: &[ScriptTemplate] = &[
    ScriptTemplate {
        id: "standard",
        name: "Feature Film",
        system_prompt: "You are a Hollywood Screenwriting Master following the principles of Syd Field and Robert McKee.\n\
            Focus on \"Show, Don't Tell\", visual storytelling, and tight pacing.\n\
            Ensure proper formatting.",
        blocks_en: &[
            (SceneHeading, "EXT. CITY STREET - DAY"),
            (Action, "The city bustles with life. PEDESTRIANS hurry past, glued to their phones."),
            (Character, "HERO"),
            (Dialogue, "Everything is about to change."),
        ],
        blocks_zh: Some(&[
            (SceneHeading, "外. 城市街道 - 白天"),
            (Action, "城市熙熙攘攘。行人匆匆走过，眼睛盯着手机。"),
            (Character, "主角"),
            (Dialogue, "一切都将改变。"),
        ]),
    },
    ScriptTemplate {
        id: "short_video",
        name: "Short Video",
        system_prompt: "You are a Viral Short Video (Vertical Drama) Scriptwriter.\n\
            Focus on extreme pacing, \"Golden 3 Seconds\" hooks, and constant conflict.\n\
            Every segment must end with a cliffhanger or emotional reversal.",
        blocks_en: &[
            (SceneHeading, "INT. LUXURY OFFICE - DAY"),
            (Action, "A stack of cash is SLAMMED onto the desk."),
            (Character, "BOSS"),
            (Dialogue, "Take it and leave her alone."),
            (Character, "PROTAGONIST"),
            (Action, "Smirks, pulls out a black card."),
            (Dialogue, "I think you misunderstood who is buying whom."),
        ],
        blocks_zh: Some(&[
            (SceneHeading, "内. 豪华办公室 - 白天"),
            (Action, "一叠现金被重重地摔在桌上。"),
            (Character, "霸总"),
            (Dialogue, "拿着钱，离开她。"),
            (Character, "主角"),
            (Action, "冷笑一声，掏出一张黑卡。"),
            (Dialogue, "你搞错了，现在是谁在收购谁。"),
        ]),
    },
    ScriptTemplate {
        id: "mystery",
        name: "Mystery / Thriller",
        system_prompt: "You are a Mystery and Thriller writer like Agatha Christie or David Fincher.\n\
            Focus on atmosphere, suspense, foreshadowing, and planting subtle clues.\n\
            Build tension through silence and specific environmental details.",
        blocks_en: &[
            (SceneHeading, "EXT. ABANDONED PIER - NIGHT"),
            (Action, "Fog rolls in thick. The sound of water lapping against rotting wood."),
            (Action, "DETECTIVE VALENTINE shines a flashlight. The beam lands on a wet shoe."),
            (Character, "VALENTINE"),
            (Dialogue, "He didn't come here alone."),
        ],
        blocks_zh: Some(&[
            (SceneHeading, "外. 废弃码头 - 夜"),
            (Action, "浓雾弥漫。水拍打着腐烂木头的声音。"),
            (Action, "瓦伦丁探长打着手电筒。光束落在一只湿透的鞋上。"),
            (Character, "瓦伦丁"),
            (Dialogue, "他不是一个人来的。"),
        ]),
    },
    ScriptTemplate {
        id: "sitcom",
        name: "Sitcom",
        system_prompt: "You are a Veteran Sitcom Showrunner.\n\
            Focus on a multi-camera format style.\n\
            Prioritize comedic timing, setup-punchline structures, and distinct character voices.\n\
            Keep scenes contained to main sets.",
        blocks_en: &[
            (SceneHeading, "INT. APARTMENT LIVING ROOM - DAY"),
            (Action, "The classic hangout spot. JERRY sits on the couch, eating cereal."),
            (Character, "JERRY"),
            (Dialogue, "You believe this? They stopped making the flakes."),
            (Character, "GEORGE"),
            (Parenthetical, "(entering)"),
            (Dialogue, "The flakes? The flakes are the best part!"),
        ],
        blocks_zh: Some(&[
            (SceneHeading, "内. 公寓客厅 - 白天"),
            (Action, "经典的聚会点。杰瑞坐在沙发上吃麦片。"),
            (Character, "杰瑞"),
            (Dialogue, "你敢信？他们停产了这种麦片。"),
            (Character, "乔治"),
            (Parenthetical, "(进门)"),
            (Dialogue, "麦片？麦片是灵魂啊！"),
        ]),
    },
    ScriptTemplate {
        id: "stageplay",
        name: "Stage Play",
        system_prompt: "You are an Award-Winning Playwright and Theater Director.\n\
            Focus on dialogue-driven narrative, monologue potential, and emotional depth.\n\
            Limit descriptions to what can be seen on stage.",
        blocks_en: &[
            (SceneHeading, "SCENE 1"),
            (Action, "A spotlight hits center stage. A lone wooden chair sits empty."),
            (Character, "HAMLET"),
            (Dialogue, "To be, or not to be..."),
            (Parenthetical, "(he pauses, looking at the audience)"),
            (Dialogue, "That is the question."),
        ],
        blocks_zh: Some(&[
            (SceneHeading, "第一幕"),
            (Action, "聚光灯打在舞台中央。一把孤零零的木椅。"),
            (Character, "哈姆雷特"),
            (Dialogue, "生存，还是毁灭..."),
            (Parenthetical, "(停顿，注视观众)"),
            (Dialogue, "这是个问题。"),
        ]),
    },
    ScriptTemplate {
        id: "commercial",
        name: "Commercial",
        system_prompt: "You are a Creative Director for high-end advertising.\n\
            Focus on grabbing attention immediately, clear branding visuals, and persuasive messaging within a short timeframe (30s-60s).",
        blocks_en: &[
            (SceneHeading, "INT. KITCHEN - DAY"),
            (Action, "A mess. Juice on the counter. A MOM looks exhausted."),
            (Character, "NARRATOR (V.O.)"),
            (Dialogue, "Life is messy. Cleaning it up shouldn't be."),
            (Transition, "CUT TO PRODUCT SHOT:"),
        ],
        blocks_zh: None,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_template_falls_back_to_standard() {
        assert_eq!(find("no-such-template").id, DEFAULT_TEMPLATE_ID);
        assert_eq!(for_script(None).id, DEFAULT_TEMPLATE_ID);
    }

    #[test]
    fn test_chinese_blocks_used_for_zh_and_dual() {
        let t = find("sitcom");
        assert_eq!(t.initial_blocks(ScriptLanguage::Zh)[2].1, "杰瑞");
        assert_eq!(t.initial_blocks(ScriptLanguage::Dual)[2].1, "杰瑞");
        assert_eq!(t.initial_blocks(ScriptLanguage::En)[2].1, "JERRY");
    }

    #[test]
    fn test_template_without_zh_uses_english() {
        let t = find("commercial");
        assert_eq!(t.initial_blocks(ScriptLanguage::Zh), t.blocks_en);
    }

    #[test]
    fn test_template_ids_unique() {
        for (i, a) in TEMPLATES.iter().enumerate() {
            for b in &TEMPLATES[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }
}
