//! Prompt wording for the two model calls.

use muse_llm::{ChatRequest, Message};

pub const COPYWRITER_PERSONA: &str = "你是一个顶尖的广告创意人，擅长围绕各种产品或主题，快速发想出极具吸引力、具象且富有画面感的广告短句或 slogan。语言可以富有想象力、情绪渲染，也可以幽默生动，但必须简短有力，适合在广告、社交媒体、海报等场景中使用。";

pub const FUSION_PERSONA: &str =
    "你是广告创意专家，擅长将多个广告短语融合成独特新颖的表达，并评估其创意程度。";

/// Instruction for the first round of ideas on a theme.
pub fn first_round(theme: &str) -> String {
    format!("请围绕主题「{theme}」生成 3～5 个创意广告词，不要编号，每句不超过12字，适合用于广告或品牌文案。")
}

/// Instruction for later rounds: fewer ideas, all different from `prior`.
pub fn follow_up_round(theme: &str, prior: &[String]) -> String {
    format!(
        "请围绕主题「{theme}」继续生成 2～3 个新的创意广告词，要求与以下内容完全不同：{}。不要重复、不要编号、每句不超过12字。",
        prior.join("，")
    )
}

/// Instruction asking for one fused phrase and a 1-10 score.
pub fn fusion(selected: &[String]) -> String {
    format!(
        "请将以下短语进行创意融合，并输出一个全新的广告短语，不超过12字：{}。并给这个融合结果打一个创意分数（1~10），格式为：“结果：xxx\n评分：x分”。",
        selected.join(" + ")
    )
}

pub fn generation_request(
    model: &str,
    temperature: f32,
    theme: &str,
    prior: &[String],
    follow_up: bool,
) -> ChatRequest {
    let instruction = if follow_up {
        follow_up_round(theme, prior)
    } else {
        first_round(theme)
    };
    ChatRequest::new(model, temperature)
        .with_message(Message::new_system(COPYWRITER_PERSONA))
        .with_message(Message::new_user(instruction))
}

pub fn fusion_request(model: &str, temperature: f32, selected: &[String]) -> ChatRequest {
    ChatRequest::new(model, temperature)
        .with_message(Message::new_system(FUSION_PERSONA))
        .with_message(Message::new_user(fusion(selected)))
}
