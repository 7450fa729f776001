//! Prompt construction for the text generator

use super::{AiMode, GenerationRequest};
use crate::model::{Block, BlockType, ScriptLanguage};

/// Size limits applied to prompts, taken from settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptLimits {
    /// Trailing blocks of script sent as context
    pub context_blocks: usize,
    /// Upper bound on blocks asked for in a continuation
    pub output_blocks: usize,
}

impl Default for PromptLimits {
    fn default() -> Self {
        Self {
            context_blocks: 50,
            output_blocks: 10,
        }
    }
}

/// Render the last `count` blocks as `TYPE: content` lines
///
/// Scene headings and character cues get a blank line before them so the
/// generator sees scene and speaker boundaries.
pub fn script_context(blocks: &[Block], count: usize) -> String {
    let start = blocks.len().saturating_sub(count);
    blocks[start..]
        .iter()
        .map(|b| {
            let prefix = match b.block_type {
                BlockType::SceneHeading | BlockType::Character => "\n",
                _ => "",
            };
            format!("{}{}: {}", prefix, b.block_type, b.content)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn language_instruction(language: ScriptLanguage) -> &'static str {
    match language {
        ScriptLanguage::En => "Generate the content strictly in English.",
        ScriptLanguage::Zh => "Generate the content strictly in Chinese (Simplified).",
        ScriptLanguage::Dual => {
            "Generate the content in Dual Language mode. For SCENE HEADINGS and ACTION, provide the English text followed by the Chinese translation. For DIALOGUE, write the English line, followed by the Chinese translation in the next block or within brackets if short."
        }
    }
}

fn continue_prompt(context: &str, output_blocks: usize) -> String {
    let max_blocks = output_blocks.max(3);
    format!(
        "Analyze the provided screenplay excerpt.

Screenplay Context:
---
{context}
---

Task: Write the immediate continuation of this script (next 3-{max_blocks} blocks).

Requirements:
1. Consistency: Strictly adhere to the established genre, tone, and format provided in your instructions.
2. Plot: Advance the current scene logically.
3. Format: You MUST use the following labeled format for every block to ensure correct parsing:
   [SCENE] INT./EXT. LOCATION - TIME
   [ACTION] Description of action...
   [CHARACTER] CHARACTER NAME
   [DIALOGUE] Dialogue content...
   [PARENTHETICAL] (instruction)
   [TRANSITION] CUT TO:

   Do not use markdown (no **bold**). Do not provide explanations. Just the labeled script blocks."
    )
}

fn ideas_prompt(context: &str) -> String {
    format!(
        "Act as a master consultant for this specific format. Based on the following segment, suggest 3 creative directions or plot twists.

Screenplay Context:
---
{context}
---

Suggestions should be:
- Concise (1-2 sentences each).
- Genre-appropriate.
- Distinct from each other.
- Returned as a simple bulleted list (start lines with - or *)."
    )
}

fn rewrite_prompt(text: &str, tone: &str) -> String {
    format!(
        "Task: Rewrite the following screenplay action or dialogue line to be more \"{tone}\".
Maintain the original meaning but enhance the style according to your expertise.

Original Text: \"{text}\"

Return only the rewritten text, no quotes or markdown. Do not include [TYPE] labels."
    )
}

/// Build a generation request
///
/// `focused` is the block to rewrite; it is ignored by the other modes.
/// Returns `None` for a rewrite with nothing focused.
pub fn build_request(
    blocks: &[Block],
    focused: Option<&Block>,
    mode: AiMode,
    language: ScriptLanguage,
    system_instruction: &str,
    limits: PromptLimits,
) -> Option<GenerationRequest> {
    let user_prompt = match mode {
        AiMode::Continue => continue_prompt(
            &script_context(blocks, limits.context_blocks),
            limits.output_blocks,
        ),
        AiMode::Ideas => ideas_prompt(&script_context(blocks, limits.context_blocks)),
        AiMode::Rewrite => rewrite_prompt(&focused?.content, "dramatic"),
    };

    Some(GenerationRequest {
        mode,
        system_prompt: format!("{}\n{}", system_instruction, language_instruction(language)),
        user_prompt,
        language,
    })
}

/// Keep only bulleted lines of an ideas response, bullets removed
pub fn parse_ideas(text: &str) -> Vec<String> {
    text.split('\n')
        .filter_map(|line| {
            let trimmed = line.trim();
            let rest = trimmed
                .strip_prefix('-')
                .or_else(|| trimmed.strip_prefix('*'))?;
            Some(rest.trim_start().to_string())
        })
        .collect()
}
