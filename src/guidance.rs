//! Next-steps entries shown in the workflow summary after a successful run,
//! and the repository topics suggested alongside them.

use crate::context::PatchContext;
use crate::games::Game;
use crate::params::PatchConfig;
use crate::report::Report;

/// Append the recommended next steps for the freshly generated patch.
pub fn list_next_steps(config: &PatchConfig, context: &PatchContext, report: &mut Report) {
    if config.needs_scripts {
        report.info(
            "Add Scripts",
            "Add any necessary scripts in the subdirectories <code>Content</code> and \
             <code>System</code> and register them in the respective SRC files. Be sure to \
             follow the <a href=\"https://github.com/szapp/Ninja/wiki/Inject-Changes#naming-conventions\">naming convention</a> \
             to ensure compatibility with other mods.",
        );
    }
    if !config.ou.is_empty() {
        report.info(
            "Add Output Units",
            "The OU files are empty place holders. Replace them with your compiled versions \
             (e.g. using Redefix). Either the CSL or the BIN file will suffice. Not both of \
             them are required.",
        );
    }
    if !config.anim.is_empty() {
        report.info(
            "Add Animations",
            "The MDS file is an empty place holder. Copy/rename it to the desired model name \
             and fill in your new armor/animations.",
        );
    }
    report.info(
        "Add Resources",
        "If you have further resources like textures, meshes or animations, add them in the \
         respective directory (<code>_compiled</code>) in the directory <code>_work</code> \
         and add their paths to the VM script. See the comments inside the VM script.",
    );
    report.info(
        "Build the Patch",
        format!(
            "In GothicVDFS click <kdb>Builder</kbd> and then <kbd>Open Script</kbd>. Navigate \
             to and open <code>{}.vm</code>. Adjust <kbd>Root Path</kbd> to the same \
             directory. Confirm the contents of the fields and click <kbd>Build volume</kbd>. \
             Alternatively, you can build the VDF using the automatic GitHub workflow of this \
             repository.",
            context.name
        ),
    );
    report.info(
        "Consult the documentation",
        "Have a look into the Ninja documentation to learn more about the possibilities of \
         using Ninja. You can find the documentation \
         <a href=\"https://github.com/szapp/Ninja\">here</a>.",
    );
    let try_without = if config.lego {
        " It is important to try various mods that <i>do not</i> use LeGo!"
    } else if config.ikarus {
        " It is important to try various mods that <i>do not</i> use Ikarus!"
    } else {
        ""
    };
    report.info(
        "Test the Patch",
        format!("Throughly test your patch in Gothic with different mods.{try_without}"),
    );
    let steam_games: Vec<&str> = [
        (Game::Gothic1, "Gothic 1"),
        (Game::Gothic2Notr, "Gothic 2"),
    ]
    .iter()
    .filter(|(game, _)| config.versions.contains(*game))
    .map(|(_, label)| *label)
    .collect();
    if !steam_games.is_empty() {
        report.info(
            "Setup auto-deployment on Steam Workshop (optional)",
            format!(
                "If you release your patch on the Steam Workshop for {}, you can enable \
                 auto-deployment of new versions by following the steps in \
                 `.github/workflows/build.yml`.",
                steam_games.join(" and/or ")
            ),
        );
    }
    report.info(
        "Increase Visibility on GitHub",
        format!(
            "To make your patch repository easier to find on GitHub, you may want to add the \
             following common keyword topics by editing the repository details. {}",
            suggest_topics(config)
                .iter()
                .map(|t| format!("<kbd>{t}</kbd>"))
                .collect::<Vec<_>>()
                .join(" ")
        ),
    );
}

/// Suggested repository keywords for Gothic patches. The Sequel counts as
/// Gothic 1 and Classic as Gothic 2.
pub fn suggest_topics(config: &PatchConfig) -> Vec<String> {
    let mut version_topics = Vec::new();
    for game in config.versions.iter() {
        let topic = match game {
            Game::Gothic1 | Game::GothicSequel => "gothic1".to_string(),
            Game::Gothic2Classic | Game::Gothic2Notr => "gothic2".to_string(),
        };
        if !version_topics.contains(&topic) {
            version_topics.push(topic);
        }
    }

    let mut topics = vec!["gothic".to_string()];
    topics.extend(version_topics);
    topics.push("modding-gothic".to_string());
    if config.needs_ninja {
        topics.push("ninja".to_string());
    }
    if config.needs_scripts {
        topics.push("daedalus".to_string());
    }
    topics
}

/// Merge the suggestions with the repository's current topics, preserving
/// suggestion order. Returns `None` when the topics are already complete.
pub fn merged_topics(config: &PatchConfig, current: &[String]) -> Option<Vec<String>> {
    let mut all = suggest_topics(config);
    for topic in current {
        if !all.contains(topic) {
            all.push(topic.clone());
        }
    }

    let mut before: Vec<&String> = current.iter().collect();
    let mut after: Vec<&String> = all.iter().collect();
    before.sort();
    after.sort();
    if before == after {
        None
    } else {
        Some(all)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::GameSet;

    fn config_with_versions(games: &[Game]) -> PatchConfig {
        let versions: GameSet = games.iter().copied().collect();
        PatchConfig {
            versions,
            ..Default::default()
        }
    }

    #[test]
    fn test_suggest_topics_folds_versions() {
        let mut config = config_with_versions(&[Game::GothicSequel, Game::Gothic2Classic]);
        config.needs_ninja = true;
        config.needs_scripts = true;
        assert_eq!(
            suggest_topics(&config),
            vec!["gothic", "gothic1", "gothic2", "modding-gothic", "ninja", "daedalus"]
        );
    }

    #[test]
    fn test_suggest_topics_dedupes_folded_versions() {
        let config = config_with_versions(&[Game::Gothic1, Game::GothicSequel]);
        assert_eq!(
            suggest_topics(&config),
            vec!["gothic", "gothic1", "modding-gothic"]
        );
    }

    #[test]
    fn test_merged_topics_none_when_up_to_date() {
        let config = config_with_versions(&[Game::Gothic1]);
        let current = vec![
            "gothic".to_string(),
            "gothic1".to_string(),
            "modding-gothic".to_string(),
        ];
        assert!(merged_topics(&config, &current).is_none());
    }

    #[test]
    fn test_merged_topics_keeps_existing_extras() {
        let config = config_with_versions(&[Game::Gothic1]);
        let current = vec!["retro".to_string()];
        let merged = merged_topics(&config, &current).unwrap();
        assert_eq!(merged, vec!["gothic", "gothic1", "modding-gothic", "retro"]);
    }

    #[test]
    fn test_next_steps_lego_advice_wins_over_ikarus() {
        let mut config = config_with_versions(&[Game::Gothic2Notr]);
        config.ikarus = true;
        config.lego = true;
        let context = test_context();
        let mut report = Report::new();
        list_next_steps(&config, &context, &mut report);
        let testing = report
            .infos
            .iter()
            .find(|i| i.summary == "Test the Patch")
            .unwrap();
        assert!(testing.details.contains("LeGo"));
        assert!(!testing.details.contains("Ikarus"));
    }

    #[test]
    fn test_next_steps_conditional_entries() {
        let mut config = config_with_versions(&[Game::Gothic2Classic]);
        config.needs_scripts = true;
        let context = test_context();
        let mut report = Report::new();
        list_next_steps(&config, &context, &mut report);

        let summaries: Vec<&str> = report.infos.iter().map(|i| i.summary.as_str()).collect();
        assert!(summaries.contains(&"Add Scripts"));
        assert!(!summaries.contains(&"Add Output Units"));
        assert!(!summaries.contains(&"Add Animations"));
        // Classic folds to Gothic 2 for topics but has no Steam Workshop
        assert!(!summaries
            .contains(&"Setup auto-deployment on Steam Workshop (optional)"));
    }

    fn test_context() -> PatchContext {
        PatchContext {
            name: "TestPatch".to_string(),
            description: String::new(),
            url: "https://github.com/user/TestPatch".to_string(),
            repo: "user/TestPatch".to_string(),
            topics: Vec::new(),
            username: "user".to_string(),
            username_full: "User".to_string(),
            user_email: "1+user@users.noreply.github.com".to_string(),
        }
    }
}
