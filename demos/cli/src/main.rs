use std::path::PathBuf;

use anyhow::Context;
use chrono::Utc;
use clap::Parser;
use portfolio_assistant::{greeting, profile_from_str, respond, ChatKnowledge};
use portfolio_core::{ChatMessage, ChatRole, Transcript};

#[derive(Parser, Debug)]
#[command(
    name = "portfolio-cli",
    about = "Đọc hồ sơ JSON và chạy thử trợ lý trả lời đóng hộp."
)]
struct Args {
    /// Đường dẫn tới file JSON hồ sơ.
    #[arg(short, long)]
    input: PathBuf,

    /// Câu hỏi gửi cho trợ lý.
    #[arg(short, long)]
    ask: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let data = std::fs::read_to_string(&args.input)
        .with_context(|| format!("Không đọc được file {:?}", args.input))?;

    let profile = profile_from_str(&data)?;
    let knowledge = ChatKnowledge::from_profile(&profile);

    println!(
        "Name: {}\nSkills & tools: {}\nProjects: {}\nExperience entries: {}",
        profile.name,
        profile.skills.len() + profile.tools.len(),
        profile.projects.len(),
        profile.experience.len()
    );

    if let Some(question) = args.ask {
        let mut transcript = Transcript::with_greeting(greeting(), Utc::now());
        transcript.push(ChatMessage::new(
            ChatRole::Visitor,
            question.clone(),
            Utc::now(),
        ));
        let answer = respond(&knowledge, &question);
        transcript.push(ChatMessage::new(ChatRole::Assistant, answer, Utc::now()));

        println!();
        for message in transcript.messages() {
            let speaker = match message.role {
                ChatRole::Visitor => "You",
                ChatRole::Assistant => "Assistant",
            };
            println!("[{speaker}] {}", message.text);
        }
    }

    Ok(())
}
