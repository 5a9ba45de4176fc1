use serde::{Deserialize, Serialize};

use leavetime_types::{BestTrain, CommuteBlock, CommutePlan, FetchResult, StatusPayload};

use crate::layout::{FontWeight, LayoutNode, Rgb};
use crate::state::DisplayState;
use crate::theme::{ALERT, LINE_ACCENT, POSITIVE, Theme, WARNING};

const REFRESH_GLYPH: &str = "\u{21bb}"; // ↻
const TRAIN_GLYPH: &str = "\u{1f686}"; // 🚆

const HEADER_PT: u32 = 14;
const TITLE_PT: u32 = 16;
const COUNTDOWN_URGENT_PT: u32 = 28;
const COUNTDOWN_NORMAL_PT: u32 = 24;
const LEAVE_NOW_PT: u32 = 26;
const LEAVE_NOW_LEGACY_PT: u32 = 28;
const INFO_PT: u32 = 12;
const LABEL_PT: u32 = 11;

/// Thresholds are inclusive: a value exactly on the boundary takes the more
/// urgent branch.
const URGENT_MINUTES_COMMUTE: i64 = 15;
const ALERT_MINUTES_COMMUTE: i64 = 5;
const URGENT_MINUTES_LEGACY: i64 = 10;

/// One complete render: the selected state, the themed background, and the
/// vertical stack of nodes the host draws in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rendered {
    pub state: DisplayState,
    pub background: Rgb,
    pub nodes: Vec<LayoutNode>,
}

/// Map a fetch result and the appearance flag to exactly one display state
/// and its layout. Total and deterministic: every input, including every
/// failure, lands in a defined state, and identical inputs produce
/// byte-identical serialized output.
pub fn select(result: &FetchResult<StatusPayload>, is_dark: bool) -> Rendered {
    let theme = Theme::resolve(is_dark);

    let plan = match result {
        Err(_) => return connection_error(&theme),
        Ok(payload) => match payload.plan() {
            Ok(plan) => plan,
            // Contract violations fail safe into the same layout as an
            // unreachable server; never render undefined values.
            Err(_) => return connection_error(&theme),
        },
    };

    match plan {
        CommutePlan::Inactive { schedule_status } => inactive(&schedule_status, &theme),
        CommutePlan::Commute { line, block } => commute(&line, &block, &theme),
        CommutePlan::BestTrain { line, train } => best_train(&line, &train, &theme),
        CommutePlan::NoSuitableTrain { line, work_start } => {
            no_suitable_train(&line, &work_start, &theme)
        }
    }
}

fn rendered(state: DisplayState, theme: &Theme, nodes: Vec<LayoutNode>) -> Rendered {
    Rendered {
        state,
        background: theme.background,
        nodes,
    }
}

fn refresh_glyph(theme: &Theme) -> LayoutNode {
    LayoutNode::text(REFRESH_GLYPH, FontWeight::Regular, INFO_PT, theme.text_subdued)
}

fn connection_error(theme: &Theme) -> Rendered {
    rendered(
        DisplayState::ConnectionError,
        theme,
        vec![
            LayoutNode::row(vec![
                LayoutNode::text("Cannot connect", FontWeight::Bold, HEADER_PT, theme.text_primary),
                refresh_glyph(theme),
            ]),
            LayoutNode::spacer(4),
            LayoutNode::text(
                "Check Pi is running",
                FontWeight::Regular,
                LABEL_PT,
                theme.text_subdued,
            ),
        ],
    )
}

fn inactive(schedule_status: &str, theme: &Theme) -> Rendered {
    let status = schedule_status.to_lowercase();
    let weekend = ["saturday", "sunday", "weekend"]
        .iter()
        .any(|marker| status.contains(marker));

    if weekend {
        rendered(
            DisplayState::NoCommuteWeekend,
            theme,
            vec![
                LayoutNode::row(vec![
                    LayoutNode::text("Day Off", FontWeight::Bold, TITLE_PT, theme.text_primary),
                    refresh_glyph(theme),
                ]),
                LayoutNode::spacer(4),
                LayoutNode::text("Nowhere to be.", FontWeight::Regular, INFO_PT, theme.text_subdued),
                LayoutNode::text("Exhale.", FontWeight::Italic, INFO_PT, theme.text_subdued),
            ],
        )
    } else {
        rendered(
            DisplayState::NoCommuteWeekday,
            theme,
            vec![
                LayoutNode::row(vec![
                    LayoutNode::text("No Office", FontWeight::Bold, TITLE_PT, theme.text_primary),
                    refresh_glyph(theme),
                ]),
                LayoutNode::spacer(4),
                LayoutNode::text(
                    schedule_status,
                    FontWeight::Regular,
                    INFO_PT,
                    theme.text_subdued,
                ),
            ],
        )
    }
}

fn commute_header(line: &str, theme: &Theme) -> LayoutNode {
    LayoutNode::row(vec![
        LayoutNode::text(line, FontWeight::Bold, HEADER_PT, LINE_ACCENT),
        LayoutNode::text(TRAIN_GLYPH, FontWeight::Regular, HEADER_PT, theme.text_primary),
        refresh_glyph(theme),
    ])
}

fn legacy_header(line: &str, theme: &Theme) -> LayoutNode {
    LayoutNode::row(vec![
        LayoutNode::text(format!("{} Line", line), FontWeight::Bold, HEADER_PT, LINE_ACCENT),
        refresh_glyph(theme),
    ])
}

fn commute(line: &str, block: &CommuteBlock, theme: &Theme) -> Rendered {
    let (state, countdown) = if block.should_have_left {
        (
            DisplayState::LeaveNow,
            vec![LayoutNode::text("Leave now", FontWeight::Bold, LEAVE_NOW_PT, WARNING)],
        )
    } else if block.minutes_until_leave <= URGENT_MINUTES_COMMUTE {
        let color = if block.minutes_until_leave <= ALERT_MINUTES_COMMUTE {
            ALERT
        } else {
            POSITIVE
        };
        (
            DisplayState::CountdownUrgent,
            vec![
                LayoutNode::text(
                    format!("{} min", block.minutes_until_leave),
                    FontWeight::Bold,
                    COUNTDOWN_URGENT_PT,
                    color,
                ),
                until_leave_label(theme),
            ],
        )
    } else {
        (
            DisplayState::CountdownNormal,
            vec![
                LayoutNode::text(
                    format!("{} min", block.minutes_until_leave),
                    FontWeight::Bold,
                    COUNTDOWN_NORMAL_PT,
                    POSITIVE,
                ),
                until_leave_label(theme),
            ],
        )
    };

    let mut nodes = vec![commute_header(line, theme), LayoutNode::spacer(6)];
    nodes.extend(countdown);
    nodes.push(LayoutNode::spacer(6));
    // Info lines in descending prominence: leave time is the one that matters.
    nodes.push(LayoutNode::text(
        format!("Leave: {}", block.leave_home),
        FontWeight::Bold,
        INFO_PT + 1,
        theme.text_primary,
    ));
    nodes.push(LayoutNode::text(
        format!("Train: {}", block.target_train),
        FontWeight::Regular,
        INFO_PT,
        theme.text_primary,
    ));
    nodes.push(LayoutNode::text(
        format!("Arrive: {}", block.arrival_target),
        FontWeight::Regular,
        INFO_PT,
        theme.text_subdued,
    ));

    rendered(state, theme, nodes)
}

fn best_train(line: &str, train: &BestTrain, theme: &Theme) -> Rendered {
    let (state, countdown) = if train.countdown_seconds <= 0 {
        (
            DisplayState::LeaveNow,
            vec![LayoutNode::text(
                "LEAVE NOW!",
                FontWeight::Bold,
                LEAVE_NOW_LEGACY_PT,
                WARNING,
            )],
        )
    } else if train.countdown_minutes <= URGENT_MINUTES_LEGACY {
        let seconds = train.countdown_seconds.rem_euclid(60);
        (
            DisplayState::CountdownUrgent,
            vec![
                LayoutNode::text(
                    format!("{}m {}s", train.countdown_minutes, seconds),
                    FontWeight::Bold,
                    COUNTDOWN_URGENT_PT,
                    ALERT,
                ),
                until_leave_label(theme),
            ],
        )
    } else {
        (
            DisplayState::CountdownNormal,
            vec![
                LayoutNode::text(
                    format!("{} min", train.countdown_minutes),
                    FontWeight::Bold,
                    COUNTDOWN_NORMAL_PT,
                    POSITIVE,
                ),
                until_leave_label(theme),
            ],
        )
    };

    let mut nodes = vec![legacy_header(line, theme), LayoutNode::spacer(6)];
    nodes.extend(countdown);
    nodes.push(LayoutNode::spacer(6));
    nodes.push(LayoutNode::text(
        format!("Train: {}", train.train_departs),
        FontWeight::Regular,
        INFO_PT,
        theme.text_primary,
    ));
    nodes.push(LayoutNode::text(
        format!("Arrive: {}", train.arrival_at_work),
        FontWeight::Regular,
        INFO_PT,
        theme.text_primary,
    ));

    rendered(state, theme, nodes)
}

fn no_suitable_train(line: &str, work_start: &str, theme: &Theme) -> Rendered {
    rendered(
        DisplayState::NoSuitableTrain,
        theme,
        vec![
            legacy_header(line, theme),
            LayoutNode::spacer(6),
            LayoutNode::text("No suitable train", FontWeight::Regular, HEADER_PT, WARNING),
            LayoutNode::spacer(4),
            LayoutNode::text(
                format!("All trains arrive after {}", work_start),
                FontWeight::Regular,
                LABEL_PT,
                theme.text_subdued,
            ),
        ],
    )
}

fn until_leave_label(theme: &Theme) -> LayoutNode {
    LayoutNode::text("until leave", FontWeight::Regular, LABEL_PT, theme.text_subdued)
}

#[cfg(test)]
mod tests {
    use super::*;
    use leavetime_types::FetchError;

    fn commute_payload(minutes: i64, should_have_left: bool) -> StatusPayload {
        StatusPayload {
            active: true,
            schedule_status: String::new(),
            line: "Piccadilly".to_string(),
            work_start: None,
            best_train: None,
            commute: Some(CommuteBlock {
                minutes_until_leave: minutes,
                should_have_left,
                leave_home: "08:12".to_string(),
                target_train: "08:20".to_string(),
                arrival_target: "08:55".to_string(),
            }),
        }
    }

    fn legacy_payload(seconds: i64, minutes: i64) -> StatusPayload {
        StatusPayload {
            active: true,
            schedule_status: String::new(),
            line: "Piccadilly".to_string(),
            work_start: Some("09:00".to_string()),
            best_train: Some(BestTrain {
                countdown_seconds: seconds,
                countdown_minutes: minutes,
                train_departs: "08:20".to_string(),
                arrival_at_work: "08:55".to_string(),
            }),
            commute: None,
        }
    }

    fn inactive_payload(status: &str) -> StatusPayload {
        StatusPayload {
            active: false,
            schedule_status: status.to_string(),
            line: String::new(),
            work_start: None,
            best_train: None,
            commute: None,
        }
    }

    fn state_of(payload: StatusPayload) -> DisplayState {
        select(&Ok(payload), true).state
    }

    fn countdown_color(rendered: &Rendered) -> Rgb {
        // Countdown is the first text node after the header row and spacer.
        match &rendered.nodes[2] {
            LayoutNode::Text { color, .. } => *color,
            other => panic!("expected countdown text, got {:?}", other),
        }
    }

    #[test]
    fn weekend_substrings_are_case_insensitive() {
        assert_eq!(
            state_of(inactive_payload("Weekend — no schedule on SATURDAY")),
            DisplayState::NoCommuteWeekend
        );
        assert_eq!(
            state_of(inactive_payload("sunday service only")),
            DisplayState::NoCommuteWeekend
        );
        assert_eq!(
            state_of(inactive_payload("Bank holiday")),
            DisplayState::NoCommuteWeekday
        );
    }

    #[test]
    fn weekday_shows_schedule_status_verbatim() {
        let rendered = select(&Ok(inactive_payload("Next window 07:00")), true);
        assert!(rendered.nodes.iter().any(|n| matches!(
            n,
            LayoutNode::Text { content, .. } if content == "Next window 07:00"
        )));
    }

    #[test]
    fn should_have_left_wins_regardless_of_minutes() {
        assert_eq!(state_of(commute_payload(45, true)), DisplayState::LeaveNow);
        assert_eq!(state_of(commute_payload(0, true)), DisplayState::LeaveNow);
    }

    #[test]
    fn fifteen_minute_boundary_splits_urgent_from_normal() {
        assert_eq!(state_of(commute_payload(15, false)), DisplayState::CountdownUrgent);
        assert_eq!(state_of(commute_payload(16, false)), DisplayState::CountdownNormal);
    }

    #[test]
    fn five_minute_boundary_splits_alert_from_positive() {
        let at_five = select(&Ok(commute_payload(5, false)), true);
        let at_six = select(&Ok(commute_payload(6, false)), true);
        assert_eq!(at_five.state, DisplayState::CountdownUrgent);
        assert_eq!(at_six.state, DisplayState::CountdownUrgent);
        assert_eq!(countdown_color(&at_five), ALERT);
        assert_eq!(countdown_color(&at_six), POSITIVE);
    }

    #[test]
    fn legacy_zero_seconds_means_leave_now() {
        assert_eq!(state_of(legacy_payload(0, 0)), DisplayState::LeaveNow);
        assert_eq!(state_of(legacy_payload(-30, 0)), DisplayState::LeaveNow);
        assert_eq!(state_of(legacy_payload(1, 0)), DisplayState::CountdownUrgent);
    }

    #[test]
    fn legacy_ten_minute_boundary_splits_urgent_from_normal() {
        assert_eq!(state_of(legacy_payload(600, 10)), DisplayState::CountdownUrgent);
        assert_eq!(state_of(legacy_payload(660, 11)), DisplayState::CountdownNormal);
    }

    #[test]
    fn legacy_urgent_formats_minutes_and_remainder_seconds() {
        let rendered = select(&Ok(legacy_payload(443, 7)), true);
        assert!(rendered.nodes.iter().any(|n| matches!(
            n,
            LayoutNode::Text { content, .. } if content == "7m 23s"
        )));
    }

    #[test]
    fn null_best_train_renders_work_start_verbatim() {
        let mut payload = legacy_payload(0, 0);
        payload.best_train = None;

        let rendered = select(&Ok(payload), true);
        assert_eq!(rendered.state, DisplayState::NoSuitableTrain);
        assert!(rendered.nodes.iter().any(|n| matches!(
            n,
            LayoutNode::Text { content, .. } if content == "All trains arrive after 09:00"
        )));
    }

    #[test]
    fn every_fetch_error_collapses_into_the_same_layout() {
        let unreachable = select(&Err(FetchError::Unreachable("timed out".into())), true);
        let invalid = select(&Err(FetchError::InvalidPayload("truncated".into())), true);
        let violation = select(
            &Err(FetchError::ContractViolation("no sub-shape".into())),
            true,
        );

        assert_eq!(unreachable.state, DisplayState::ConnectionError);
        assert_eq!(unreachable, invalid);
        assert_eq!(unreachable, violation);
    }

    #[test]
    fn active_payload_without_sub_shapes_fails_safe() {
        let payload = StatusPayload {
            active: true,
            schedule_status: String::new(),
            line: "Piccadilly".to_string(),
            work_start: None,
            best_train: None,
            commute: None,
        };

        let rendered = select(&Ok(payload), true);
        assert_eq!(rendered.state, DisplayState::ConnectionError);
    }

    #[test]
    fn selection_is_idempotent() {
        let payload = commute_payload(4, false);
        let first = serde_json::to_string(&select(&Ok(payload.clone()), true)).unwrap();
        let second = serde_json::to_string(&select(&Ok(payload), true)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn theme_switch_changes_colors_but_not_content_or_structure() {
        let payload = commute_payload(12, false);
        let dark = select(&Ok(payload.clone()), true);
        let light = select(&Ok(payload), false);

        assert_eq!(dark.state, light.state);
        assert_ne!(dark.background, light.background);

        fn shape(nodes: &[LayoutNode], out: &mut Vec<String>) {
            for node in nodes {
                match node {
                    LayoutNode::Text {
                        content,
                        weight,
                        size_pt,
                        ..
                    } => out.push(format!("text:{}:{:?}:{}", content, weight, size_pt)),
                    LayoutNode::Spacer { size_pt } => out.push(format!("spacer:{}", size_pt)),
                    LayoutNode::Row { children } => {
                        out.push("row".to_string());
                        shape(children, out);
                    }
                }
            }
        }

        let mut dark_shape = Vec::new();
        let mut light_shape = Vec::new();
        shape(&dark.nodes, &mut dark_shape);
        shape(&light.nodes, &mut light_shape);
        assert_eq!(dark_shape, light_shape);
    }

    #[test]
    fn urgent_commute_example_renders_in_full() {
        let rendered = select(&Ok(commute_payload(4, false)), true);

        assert_eq!(rendered.state, DisplayState::CountdownUrgent);
        assert_eq!(countdown_color(&rendered), ALERT);

        let texts: Vec<&str> = rendered
            .nodes
            .iter()
            .filter_map(|n| match n {
                LayoutNode::Text { content, .. } => Some(content.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(
            texts,
            vec![
                "4 min",
                "until leave",
                "Leave: 08:12",
                "Train: 08:20",
                "Arrive: 08:55"
            ]
        );
    }

    #[test]
    fn weekend_example_renders_day_off_copy() {
        let rendered = select(&Ok(inactive_payload("Weekend — no schedule")), true);

        assert_eq!(rendered.state, DisplayState::NoCommuteWeekend);

        let header = match &rendered.nodes[0] {
            LayoutNode::Row { children } => children,
            other => panic!("expected header row, got {:?}", other),
        };
        assert!(matches!(
            &header[0],
            LayoutNode::Text { content, weight: FontWeight::Bold, .. } if content == "Day Off"
        ));
        assert!(rendered.nodes.iter().any(|n| matches!(
            n,
            LayoutNode::Text { content, .. } if content == "Nowhere to be."
        )));
        assert!(rendered.nodes.iter().any(|n| matches!(
            n,
            LayoutNode::Text { content, .. } if content == "Exhale."
        )));
    }
}
