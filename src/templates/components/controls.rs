use crate::domain::constraints::ALL_SENTINEL;
use crate::domain::{Bounds, Categorical, Range, SortDirection, Tab};
use crate::query::Controls;
use maud::{html, Markup};

pub struct ControlsVm<'a> {
    pub states: &'a [String],
    pub makes: &'a [String],
    /// City options for the current state selection.
    pub cities: &'a [String],
    pub bounds: &'a Bounds,
    pub controls: &'a Controls,
}

/// The filter form. Any change re-requests the active tab; a state change also
/// re-requests the city options.
pub fn controls_form(vm: &ControlsVm) -> Markup {
    let c = &vm.controls.constraints;

    html! {
        form
            id="controls"
            class="controls"
            action="/"
            method="get"
            hx-get="/view"
            hx-target="#tab-content"
            hx-swap="innerHTML"
            hx-trigger="change"
        {
            div class="control-row" {
                div class="control" {
                    label for="state-dropdown" { "State" }
                    select
                        id="state-dropdown"
                        name="state"
                        multiple
                        hx-get="/cities"
                        hx-target="#city-field"
                        hx-swap="innerHTML"
                        hx-trigger="change"
                        hx-include="#controls"
                    {
                        (multi_options("All States", vm.states, &c.states))
                    }
                }

                div class="control" id="city-field" {
                    (city_select(vm.cities, &c.cities))
                }

                div class="control" {
                    label for="make-dropdown" { "Make" }
                    select id="make-dropdown" name="make" multiple {
                        (multi_options("All Makes", vm.makes, &c.makes))
                    }
                }
            }

            div class="control-row" {
                div class="control" {
                    label for="sort-dropdown" { "Price order" }
                    select id="sort-dropdown" name="sort" {
                        (direction_option(SortDirection::Ascending, "Price: Low to High", c.price_order))
                        (direction_option(SortDirection::Descending, "Price: High to Low", c.price_order))
                    }
                }

                div class="control" {
                    label for="time-dropdown" { "Posted" }
                    select id="time-dropdown" name="time" {
                        (direction_option(SortDirection::Descending, "Newest", c.time_order))
                        (direction_option(SortDirection::Ascending, "Oldest", c.time_order))
                    }
                }
            }

            div class="control-row" {
                (range_inputs("Price ($)", "price", c.price, vm.bounds.price))
                (range_inputs("Odometer (mi)", "odometer", c.odometer, vm.bounds.odometer))
                (range_inputs("Model year", "year", c.year, vm.bounds.year))
            }

            fieldset class="tabs" {
                legend class="sr-only" { "View" }
                @for tab in Tab::ALL {
                    label class="tab" {
                        input type="radio" name="tab" value=(tab.id()) checked[tab == vm.controls.tab];
                        span { (tab.label()) }
                    }
                }
            }
        }
    }
}

/// The city multi-select, swapped in on its own whenever the state selection
/// changes.
pub fn city_select(cities: &[String], selected: &Categorical) -> Markup {
    html! {
        label for="city-dropdown" { "City" }
        select id="city-dropdown" name="city" multiple {
            (multi_options("All Locations", cities, selected))
        }
    }
}

fn multi_options(all_label: &str, values: &[String], selected: &Categorical) -> Markup {
    html! {
        option value=(ALL_SENTINEL) selected[selected.is_selected(ALL_SENTINEL)] { (all_label) }
        @for value in values {
            option value=(value) selected[selected.is_selected(value)] { (value) }
        }
    }
}

fn direction_option(direction: SortDirection, label: &str, current: SortDirection) -> Markup {
    html! {
        option value=(direction.as_str()) selected[direction == current] { (label) }
    }
}

/// A `[min, max]` pair of number inputs. The dataset extents are shown as
/// placeholders only; inverted or out-of-range values are sent as typed.
fn range_inputs<T: maud::Render + Copy>(label: &str, name: &str, current: Range<T>, extent: Range<T>) -> Markup {
    html! {
        div class="control range" {
            span class="control-label" { (label) }
            input
                type="number"
                step="any"
                name=(format!("{name}_min"))
                aria-label=(format!("{label} minimum"))
                placeholder=(extent.min)
                value=(current.min);
            span { "–" }
            input
                type="number"
                step="any"
                name=(format!("{name}_max"))
                aria-label=(format!("{label} maximum"))
                placeholder=(extent.max)
                value=(current.max);
        }
    }
}
