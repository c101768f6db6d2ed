use crate::Route;

#[derive(Clone, Debug, PartialEq)]
pub struct NavItem {
    pub label: &'static str,
    pub route: Route,
    pub is_active: bool,
}

const NAV_ENTRIES: [(&str, Route, &str); 5] = [
    ("Home", Route::Home, "/"),
    ("Rooms", Route::Rooms, "/rooms"),
    ("Facilities", Route::Facilities, "/facilities"),
    ("Contact", Route::Contact, "/contact"),
    ("About", Route::About, "/about"),
];

/// Builds the navigation list with the entry matching `path` marked active.
pub fn nav_items(path: &str) -> Vec<NavItem> {
    let current = top_level_segment(path);
    NAV_ENTRIES
        .iter()
        .map(|(label, route, href)| NavItem {
            label: *label,
            route: route.clone(),
            is_active: top_level_segment(href) == current,
        })
        .collect()
}

// "", "/" and "/?x" all collapse to "" (home); "/rooms/deluxe" to "rooms".
fn top_level_segment(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    path.trim_start_matches('/').split('/').next().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active_labels(path: &str) -> Vec<&'static str> {
        nav_items(path)
            .into_iter()
            .filter(|item| item.is_active)
            .map(|item| item.label)
            .collect()
    }

    #[test]
    fn keeps_declared_order() {
        let labels: Vec<_> = nav_items("/").into_iter().map(|i| i.label).collect();
        assert_eq!(labels, ["Home", "Rooms", "Facilities", "Contact", "About"]);
    }

    #[test]
    fn rooms_path_activates_only_rooms() {
        assert_eq!(active_labels("/rooms"), ["Rooms"]);
    }

    #[test]
    fn root_and_empty_path_activate_home() {
        assert_eq!(active_labels("/"), ["Home"]);
        assert_eq!(active_labels(""), ["Home"]);
    }

    #[test]
    fn trailing_slash_and_nested_paths_match_their_section() {
        assert_eq!(active_labels("/contact/"), ["Contact"]);
        assert_eq!(active_labels("/rooms/deluxe"), ["Rooms"]);
        assert_eq!(active_labels("/about?ref=footer"), ["About"]);
    }

    #[test]
    fn unknown_paths_activate_nothing() {
        assert!(active_labels("/404").is_empty());
        assert!(active_labels("/roomservice").is_empty());
    }
}
