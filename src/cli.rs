// src/cli.rs
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use crate::environment::EnvironmentConfig;
use crate::notifications::NotificationStore;
use crate::persistence::FileStorage;
use crate::poller::{NotificationPoller, POLL_PERIOD};
use crate::recorder::InteractionRecorder;
use crate::service_client::MatchServiceClient;
use crate::session::{Decision, MatchSession, SessionStep};
use crate::toast::LogToasts;
use crate::types::CandidateProfile;

#[derive(Parser)]
#[command(name = "talentmatch")]
#[command(about = "Candidate matching sessions and the notification inbox")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Override the storage directory from config.yaml
    #[arg(long)]
    pub storage_path: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run an interactive matching session for a company
    Session {
        #[arg(long)]
        company_id: String,
    },
    /// Manage the persisted notification inbox
    Notifications {
        #[command(subcommand)]
        command: NotificationCommand,
    },
}

#[derive(Subcommand)]
pub enum NotificationCommand {
    /// List all notifications, newest first
    List,
    /// Mark one notification as read
    Read { id: String },
    /// Mark every notification as read
    ReadAll,
    /// Delete one notification
    Delete { id: String },
    /// Delete every notification
    Clear,
}

pub async fn handle_command(cli: Cli) -> Result<()> {
    let config = EnvironmentConfig::load()?;
    let storage_path = cli.storage_path.unwrap_or(config.storage_path.clone());

    let storage = Arc::new(FileStorage::new(storage_path)?);
    let toasts = Arc::new(LogToasts);
    let store = Arc::new(NotificationStore::new(storage.clone(), toasts.clone()));

    match cli.command {
        Command::Session { company_id } => {
            let client = Arc::new(MatchServiceClient::new(config.match_service_url)?);
            let candidates = client.fetch_candidates(&company_id).await?;
            info!("Fetched {} candidates for {}", candidates.len(), company_id);

            let recorder = Arc::new(InteractionRecorder::new(
                client,
                storage.clone(),
                toasts.clone(),
            ));
            let session = MatchSession::new(&company_id, candidates, recorder, toasts);

            run_session(session, store).await?;
        }

        Command::Notifications { command } => match command {
            NotificationCommand::List => {
                let listed = store.list();
                if listed.is_empty() {
                    println!("No notifications.");
                } else {
                    println!("{} notifications, {} unread:", listed.len(), store.unread_count());
                    for n in listed {
                        let marker = if n.read { " " } else { "*" };
                        println!(
                            "{} [{}] {} — {} ({})",
                            marker,
                            n.created_at.format("%Y-%m-%d %H:%M"),
                            n.title,
                            n.message,
                            n.id
                        );
                    }
                }
            }
            NotificationCommand::Read { id } => {
                store.mark_as_read(&id);
                println!("Marked as read: {}", id);
            }
            NotificationCommand::ReadAll => {
                store.mark_all_as_read();
                println!("All notifications marked as read.");
            }
            NotificationCommand::Delete { id } => {
                store.delete(&id);
                println!("Deleted: {}", id);
            }
            NotificationCommand::Clear => {
                store.clear_all();
                println!("Notification inbox cleared.");
            }
        },
    }

    Ok(())
}

/// Interactive decision loop: s = save, r = reject, q = quit.
///
/// The poller runs for the duration of the view and is dropped (cancelled)
/// on exit.
async fn run_session(mut session: MatchSession, store: Arc<NotificationStore>) -> Result<()> {
    let (_poller, summary_rx) = NotificationPoller::start(store, POLL_PERIOD);

    loop {
        match session.current() {
            Some(candidate) => print_candidate(candidate, session.queue().remaining()),
            None => {
                println!("No candidates to show.");
                break;
            }
        }

        let unread = summary_rx.borrow().unread_count;
        if unread > 0 {
            println!("({unread} unread notifications)");
        }

        print!("[s]ave / [r]eject / [q]uit > ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if std::io::stdin().read_line(&mut line)? == 0 {
            break;
        }

        let step = match line.trim().to_lowercase().as_str() {
            "s" => session.decide(Decision::Save).await,
            "r" => session.decide(Decision::Reject).await,
            "q" => break,
            other => {
                println!("Unknown input: {other}");
                continue;
            }
        };

        if step == SessionStep::Exhausted {
            println!("All candidates processed; starting over from the top.");
        }
    }

    let saved: Vec<_> = session.saved().iter().map(|c| c.name.as_str()).collect();
    if saved.is_empty() {
        println!("Session finished. No candidates saved.");
    } else {
        println!("Session finished. Saved: {}", saved.join(", "));
    }

    Ok(())
}

fn print_candidate(candidate: &CandidateProfile, remaining: usize) {
    println!();
    println!("{} — {}", candidate.name, candidate.location);
    println!("  Education:  {}", candidate.education);
    println!("  Experience: {}", candidate.experience);
    println!("  Skills:     {}", candidate.skills.join(", "));
    if let Some(bio) = &candidate.bio {
        println!("  Bio:        {}", bio);
    }
    if let Some(projects) = &candidate.projects {
        for project in projects {
            println!(
                "  Project:    {} — {} [{}]",
                project.name,
                project.description,
                project.technologies.join(", ")
            );
        }
    }
    println!("  ({} more candidate(s) in this batch)", remaining);
}
