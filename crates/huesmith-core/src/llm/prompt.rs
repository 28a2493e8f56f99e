//! Palette prompt construction
//!
//! The system persona and the user-instruction template are fixed; the only
//! variable parts are the user's prompt text and the optional reference
//! colors, which become a bullet list.

use crate::llm::messages::ChatMessage;
use crate::types::{HexColor, PaletteRequest};

/// Persona sent as the system message on every request
const PALETTE_PERSONA: &str = "You are a front-end and design specialist, you like making awesome \
design systems with figma and tailwindcss. That expertise you have leads you to always keep in \
mind the best practices of the technology you use to come with perfect technical and design-wise \
decisions.";

/// Build the two-message chat request for a palette submission
///
/// System persona first, then the user instruction embedding the prompt and,
/// when reference colors are present, a bullet list of them.
pub fn build_messages(request: &PaletteRequest) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(PALETTE_PERSONA),
        ChatMessage::user(user_instruction(&request.prompt, &request.colors)),
    ]
}

fn user_instruction(prompt: &str, colors: &[HexColor]) -> String {
    let mut instruction = format!(
        "Based on my indications, give me a color palette for me to add to my tailwind.config \
file. I don't need any conversation with you, just the color extension to add to my config. The \
palette should be unique without repeating the actual colors tailwind gives as defaults. Please \
for each color you suggest to me, add the different variants of it, for example:\n\
``` blue: {{50: \"some hex code\", 100: \"another hex code\", and so}}```\n\
{prompt}\r\n"
    );

    if !colors.is_empty() {
        instruction.push_str(
            "Also, keep in mind the following colors as a reference for the palette I'm looking \
for, they should be included:\n",
        );
        for color in colors {
            instruction.push_str(&format!("- {color}\r\n"));
        }
    }

    instruction
}
