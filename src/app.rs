//! The interactive shell.
//!
//! One loop: while logged out, prompt for credentials; while logged in,
//! show the role's navigation and dispatch the chosen tab to its view.
//! All role-conditional branching lives in the resolver; the shell only
//! renders what it is told to.

use crate::state::AppState;
use crate::views::dashboard::{admin, parent, student, teacher};
use crate::views::feeds::AnnouncementsFeed;
use crate::views::{calendar, classes, parent_access, placeholder, students};
use anyhow::Result;
use classboard_core::{ClassesVariant, DashboardVariant, ViewVariant, content_for, navigation_for};
use classboard_models::{NewAnnouncement, User};
use classboard_session::SessionError;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Password, Select};

enum Exit {
    Logout,
    Quit,
}

pub async fn run(state: AppState) -> Result<()> {
    loop {
        let Some(user) = state.session.current_user() else {
            if !login(&state).await? {
                return Ok(());
            }
            continue;
        };
        match home(&state, &user).await? {
            Exit::Logout => state.session.logout(),
            Exit::Quit => return Ok(()),
        }
    }
}

/// Prompt for credentials until login succeeds or the email is left blank.
/// Returns false when the user bails out.
async fn login(state: &AppState) -> Result<bool> {
    let theme = ColorfulTheme::default();
    println!("Sign in (leave email blank to quit)\n");
    loop {
        let email: String = Input::with_theme(&theme)
            .with_prompt("Email")
            .allow_empty(true)
            .interact_text()?;
        if email.trim().is_empty() {
            return Ok(false);
        }
        let password = Password::with_theme(&theme)
            .with_prompt("Password")
            .interact()?;

        match state.session.login(email.trim(), &password).await {
            Ok(user) => {
                println!("\nSigned in as {} ({})\n", user.name, user.role);
                return Ok(true);
            }
            Err(SessionError::InvalidCredentials) => {
                println!("Invalid credentials, try again.\n");
            }
            Err(err) => return Err(err.into()),
        }
    }
}

async fn home(state: &AppState, user: &User) -> Result<Exit> {
    let theme = ColorfulTheme::default();
    loop {
        let items = navigation_for(Some(user.role));
        let mut labels: Vec<String> = items
            .iter()
            .map(|i| format!("{} {}", i.icon.glyph(), i.label))
            .collect();
        labels.push("Log out".to_string());
        labels.push("Quit".to_string());

        let choice = Select::with_theme(&theme)
            .with_prompt(format!("{} · {}", user.name, user.role))
            .items(&labels)
            .default(0)
            .interact()?;

        if choice == items.len() {
            return Ok(Exit::Logout);
        }
        if choice == items.len() + 1 {
            return Ok(Exit::Quit);
        }
        open_tab(state, user, items[choice].id).await?;
    }
}

async fn open_tab(state: &AppState, user: &User, tab: &str) -> Result<()> {
    match content_for(tab, Some(user.role)) {
        ViewVariant::Dashboard(DashboardVariant::Admin) => {
            println!("\n{}", admin::render(&user.name));
        }
        ViewVariant::Dashboard(DashboardVariant::Teacher) => {
            println!("\n{}", teacher::render(user));
        }
        ViewVariant::Dashboard(DashboardVariant::Student) => {
            student_dashboard(state, user).await?;
        }
        ViewVariant::Dashboard(DashboardVariant::Parent) => {
            println!("\n{}", parent::render(state, user).await);
        }
        ViewVariant::Students => students_page()?,
        ViewVariant::Calendar => {
            println!("\n{}", calendar::render(chrono::Local::now().date_naive()));
        }
        ViewVariant::Classes(ClassesVariant::Student) => student_classes(state)?,
        ViewVariant::Classes(ClassesVariant::Teacher) => teacher_classes(state, user).await?,
        ViewVariant::ParentAccess => parent_access_page(state, user).await?,
        ViewVariant::AccessDenied { reason } => {
            println!("\n{}", placeholder::access_denied(&reason));
        }
        ViewVariant::UnderConstruction { tab } => {
            println!("\n{}", placeholder::under_construction(&tab));
        }
    }
    Ok(())
}

/// The student dashboard keeps its feeds polling while the refresh loop
/// runs; leaving the loop drops them.
async fn student_dashboard(state: &AppState, user: &User) -> Result<()> {
    let theme = ColorfulTheme::default();
    let dashboard = student::StudentDashboard::open(state, user);
    loop {
        println!("\n{}", dashboard.render(&student::now_hhmm()));
        let choice = Select::with_theme(&theme)
            .items(&["Refresh", "Back"])
            .default(0)
            .interact()?;
        if choice == 1 {
            return Ok(());
        }
    }
}

fn students_page() -> Result<()> {
    let theme = ColorfulTheme::default();
    let mut page = students::StudentsPage::new();

    page.search = Input::with_theme(&theme)
        .with_prompt("Search (name, email, or id; blank for all)")
        .allow_empty(true)
        .interact_text()?;

    let grades = ["All", "9th", "10th", "11th", "12th"];
    let picked = Select::with_theme(&theme)
        .with_prompt("Grade")
        .items(&grades)
        .default(0)
        .interact()?;
    page.grade_filter = (picked > 0).then(|| grades[picked].to_string());

    loop {
        println!("\n{}", page.render());
        let keys = page.sortable_keys();
        let mut options: Vec<String> = keys.iter().map(|k| format!("Sort by {k}")).collect();
        options.push("Back".to_string());
        let choice = Select::with_theme(&theme)
            .items(&options)
            .default(options.len() - 1)
            .interact()?;
        if choice == keys.len() {
            return Ok(());
        }
        page.toggle_sort(&keys[choice]);
    }
}

fn student_classes(state: &AppState) -> Result<()> {
    let theme = ColorfulTheme::default();
    let feed = AnnouncementsFeed::open(state.api.clone(), state.poll.announcements);
    loop {
        println!("\n{}", classes::render_student(&feed));
        let choice = Select::with_theme(&theme)
            .items(&["Refresh", "Back"])
            .default(0)
            .interact()?;
        if choice == 1 {
            return Ok(());
        }
    }
}

async fn teacher_classes(state: &AppState, user: &User) -> Result<()> {
    let theme = ColorfulTheme::default();
    loop {
        println!("\n{}", classes::render_teacher(user));
        let taught = classes::classes_taught_by(&user.name);
        if taught.is_empty() {
            return Ok(());
        }
        let choice = Select::with_theme(&theme)
            .items(&["Post announcement", "Back"])
            .default(1)
            .interact()?;
        if choice == 1 {
            return Ok(());
        }

        let class_names: Vec<&str> = taught.iter().map(|c| c.name).collect();
        let class = &taught[Select::with_theme(&theme)
            .with_prompt("Class")
            .items(&class_names)
            .default(0)
            .interact()?];
        let title: String = Input::with_theme(&theme)
            .with_prompt("Title")
            .interact_text()?;
        let content: String = Input::with_theme(&theme)
            .with_prompt("Content")
            .interact_text()?;

        let announcement = NewAnnouncement {
            title,
            content,
            teacher: user.name.clone(),
            class_id: class.id.to_string(),
            date: chrono::Local::now().format("%b %-d, %Y").to_string(),
        };
        match state.api.post_announcement(&announcement).await {
            Ok(posted) => println!("Posted \"{}\" to {}.", posted.title, class.name),
            Err(err) => println!("Could not post announcement: {err}"),
        }
    }
}

async fn parent_access_page(state: &AppState, user: &User) -> Result<()> {
    let theme = ColorfulTheme::default();
    loop {
        let links = match parent_access::links(state, user).await {
            Ok(links) => links,
            Err(err) => {
                println!("Could not load parent links: {err}");
                return Ok(());
            }
        };
        println!("\n{}", parent_access::render(&links));

        let choice = Select::with_theme(&theme)
            .items(&["Grant access", "Edit nickname", "Refresh", "Back"])
            .default(2)
            .interact()?;
        match choice {
            0 => {
                let email: String = Input::with_theme(&theme)
                    .with_prompt("Parent email")
                    .interact_text()?;
                match parent_access::grant(state, user, email.trim()).await {
                    Ok(link) => println!("Granted access to {}.", link.parent_email),
                    Err(message) => println!("{message}"),
                }
            }
            1 => {
                if links.is_empty() {
                    println!("No links to rename.");
                    continue;
                }
                let names: Vec<String> = links
                    .iter()
                    .map(|l| format!("{} <{}>", l.display_name(), l.parent_email))
                    .collect();
                let picked = Select::with_theme(&theme)
                    .with_prompt("Which link")
                    .items(&names)
                    .default(0)
                    .interact()?;
                let nickname: String = Input::with_theme(&theme)
                    .with_prompt("Nickname")
                    .interact_text()?;
                match parent_access::rename(state, user, &links[picked].parent_email, &nickname)
                    .await
                {
                    Ok(link) => println!("Renamed to {}.", link.display_name()),
                    Err(message) => println!("{message}"),
                }
            }
            2 => continue,
            _ => return Ok(()),
        }
    }
}
