// Calendar renderer: turns a structured itinerary into a read-only view

use std::fmt;

use crate::model::DayPlan;

pub const CALENDAR_HEADER: &str = "Trip Planner";

pub const MORNING_LABEL: &str = "Morning";
pub const LUNCH_LABEL: &str = "Lunch";
pub const AFTERNOON_LABEL: &str = "Afternoon";
pub const EVENING_LABEL: &str = "Evening";

#[derive(Debug, Clone, PartialEq)]
pub struct CalendarView {
    pub days: Vec<DaySection>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DaySection {
    pub day: u32,
    pub heading: String,
    pub slots: Vec<TimeSlot>,
}

// The four subsections of a day, in fixed order. Presence is guaranteed by
// the data model; the renderer never sees a partial day.
#[derive(Debug, Clone, PartialEq)]
pub enum TimeSlot {
    Activity {
        label: &'static str,
        activity: String,
        description: String,
    },
    Meal {
        label: &'static str,
        description: String,
        food_suggestions: Vec<String>,
    },
}

impl TimeSlot {
    pub fn label(&self) -> &'static str {
        match self {
            TimeSlot::Activity { label, .. } => label,
            TimeSlot::Meal { label, .. } => label,
        }
    }
}

impl DaySection {
    fn from_plan(plan: &DayPlan) -> Self {
        Self {
            day: plan.day,
            heading: format!("Day {}: {}", plan.day, plan.title),
            slots: vec![
                TimeSlot::Activity {
                    label: MORNING_LABEL,
                    activity: plan.morning.activity.clone(),
                    description: plan.morning.description.clone(),
                },
                TimeSlot::Meal {
                    label: LUNCH_LABEL,
                    description: plan.lunch.description.clone(),
                    food_suggestions: plan.lunch.food_suggestions.clone(),
                },
                TimeSlot::Activity {
                    label: AFTERNOON_LABEL,
                    activity: plan.afternoon.activity.clone(),
                    description: plan.afternoon.description.clone(),
                },
                TimeSlot::Activity {
                    label: EVENING_LABEL,
                    activity: plan.evening.activity.clone(),
                    description: plan.evening.description.clone(),
                },
            ],
        }
    }
}

// Absent or empty itinerary renders nothing at all, not an empty view.
// Sections come out in ascending day order regardless of input order.
pub fn render(itinerary: Option<&[DayPlan]>) -> Option<CalendarView> {
    let itinerary = itinerary?;
    if itinerary.is_empty() {
        return None;
    }

    let mut ordered: Vec<&DayPlan> = itinerary.iter().collect();
    ordered.sort_by_key(|plan| plan.day);

    Some(CalendarView {
        days: ordered.into_iter().map(DaySection::from_plan).collect(),
    })
}

impl fmt::Display for CalendarView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{CALENDAR_HEADER}")?;
        for section in &self.days {
            writeln!(f)?;
            writeln!(f, "{}", section.heading)?;
            for slot in &section.slots {
                match slot {
                    TimeSlot::Activity {
                        label,
                        activity,
                        description,
                    } => {
                        writeln!(f, "  {label}")?;
                        writeln!(f, "    Activity: {activity}")?;
                        writeln!(f, "    {description}")?;
                    }
                    TimeSlot::Meal {
                        label,
                        description,
                        food_suggestions,
                    } => {
                        writeln!(f, "  {label}")?;
                        writeln!(f, "    {description}")?;
                        for food in food_suggestions {
                            writeln!(f, "    - {food}")?;
                        }
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ActivityBlock, MealBlock};

    fn day(number: u32, foods: &[&str]) -> DayPlan {
        DayPlan {
            day: number,
            title: format!("Day {number} title"),
            morning: ActivityBlock {
                activity: "Temple visit".to_string(),
                description: "Early start".to_string(),
            },
            lunch: MealBlock {
                description: "Local lunch".to_string(),
                food_suggestions: foods.iter().map(|s| s.to_string()).collect(),
            },
            afternoon: ActivityBlock {
                activity: "River walk".to_string(),
                description: "Along the bank".to_string(),
            },
            evening: ActivityBlock {
                activity: "Night market".to_string(),
                description: "Street stalls".to_string(),
            },
        }
    }

    #[test]
    fn absent_and_empty_itineraries_render_nothing() {
        assert!(render(None).is_none());
        assert!(render(Some(&[])).is_none());
    }

    #[test]
    fn one_day_renders_one_section_with_four_fixed_slots() {
        let view = render(Some(&[day(1, &["Pad thai"])])).unwrap();
        assert_eq!(view.days.len(), 1);

        let section = &view.days[0];
        assert_eq!(section.heading, "Day 1: Day 1 title");
        let labels: Vec<&str> = section.slots.iter().map(|slot| slot.label()).collect();
        assert_eq!(labels, vec!["Morning", "Lunch", "Afternoon", "Evening"]);
    }

    #[test]
    fn empty_food_suggestions_render_as_empty_list() {
        let view = render(Some(&[day(1, &[])])).unwrap();
        match &view.days[0].slots[1] {
            TimeSlot::Meal {
                food_suggestions, ..
            } => assert!(food_suggestions.is_empty()),
            other => panic!("expected lunch slot, got {other:?}"),
        }

        // Still a lunch subsection in the text output, with zero items.
        let text = view.to_string();
        assert!(text.contains("  Lunch\n    Local lunch\n"));
        assert!(!text.contains("- "));
    }

    #[test]
    fn days_render_in_ascending_order() {
        let view = render(Some(&[day(3, &[]), day(1, &[]), day(2, &[])])).unwrap();
        let order: Vec<u32> = view.days.iter().map(|section| section.day).collect();
        assert_eq!(order, vec![1, 2, 3]);
    }

    #[test]
    fn display_includes_header_and_single_item_list() {
        let text = render(Some(&[day(1, &["Khao soi"])])).unwrap().to_string();
        assert!(text.starts_with("Trip Planner\n"));
        assert!(text.contains("Day 1: Day 1 title"));
        assert!(text.contains("    - Khao soi\n"));
    }
}
