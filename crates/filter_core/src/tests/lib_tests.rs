use super::*;
use std::{cell::RefCell, collections::HashMap, rc::Rc};

type Log = Rc<RefCell<Vec<FilterSelection>>>;

fn recording(
    initial: FilterSelection,
) -> (FilterSelectionController<impl FnMut(&FilterSelection)>, Log) {
    let log: Log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    let controller = FilterSelectionController::new(initial, move |selection: &FilterSelection| {
        sink.borrow_mut().push(selection.clone())
    });
    (controller, log)
}

#[test]
fn construction_keeps_initial_values_and_does_not_notify() {
    let initial = FilterSelection::new(
        Some(ConsultationMode::Clinic),
        [Specialty::Dentist],
        Some(SortKey::Experience),
    );
    let (controller, log) = recording(initial.clone());

    assert_eq!(controller.selection(), &initial);
    assert_eq!(controller.visibility(), SectionVisibility::default());
    assert!(log.borrow().is_empty());
}

#[test]
fn announce_reports_current_selection_unchanged() {
    let initial = FilterSelection::new(None, [Specialty::Ent], None);
    let (mut controller, log) = recording(initial.clone());

    controller.announce();

    assert_eq!(*log.borrow(), vec![initial.clone()]);
    assert_eq!(controller.selection(), &initial);
}

#[test]
fn reselecting_active_mode_clears_then_restores() {
    let (mut controller, log) = recording(FilterSelection::default());

    controller.set_consultation_mode(ConsultationMode::Video);
    assert_eq!(controller.selection().consultation_mode, Some(ConsultationMode::Video));

    controller.set_consultation_mode(ConsultationMode::Video);
    assert_eq!(controller.selection().consultation_mode, None);

    controller.set_consultation_mode(ConsultationMode::Video);
    assert_eq!(controller.selection().consultation_mode, Some(ConsultationMode::Video));

    let modes: Vec<_> = log.borrow().iter().map(|s| s.consultation_mode).collect();
    assert_eq!(
        modes,
        vec![Some(ConsultationMode::Video), None, Some(ConsultationMode::Video)]
    );
}

#[test]
fn other_mode_replaces_active_mode() {
    let (mut controller, _log) =
        recording(FilterSelection::new(Some(ConsultationMode::Video), [], None));

    controller.set_consultation_mode(ConsultationMode::Clinic);

    assert_eq!(controller.selection().consultation_mode, Some(ConsultationMode::Clinic));
}

#[test]
fn sort_key_replaces_with_one_notification_each() {
    let (mut controller, log) = recording(FilterSelection::default());

    controller.set_sort_key(SortKey::Fees);
    controller.set_sort_key(SortKey::Experience);

    assert_eq!(controller.selection().sort_key, Some(SortKey::Experience));
    let log = log.borrow();
    assert_eq!(log.len(), 2);
    assert_eq!(log[0].sort_key, Some(SortKey::Fees));
    assert_eq!(log[1].sort_key, Some(SortKey::Experience));
}

#[test]
fn reselecting_active_sort_key_clears_it() {
    let (mut controller, log) =
        recording(FilterSelection::new(None, [], Some(SortKey::Fees)));

    controller.set_sort_key(SortKey::Fees);

    assert_eq!(controller.selection().sort_key, None);
    assert_eq!(log.borrow().len(), 1);
}

#[test]
fn toggling_specialty_reports_full_selection_in_insertion_order() {
    let (mut controller, log) = recording(FilterSelection::new(
        Some(ConsultationMode::Video),
        [Specialty::Dentist],
        None,
    ));

    controller.toggle_specialty(Specialty::Cardiologist);

    assert_eq!(
        *log.borrow(),
        vec![FilterSelection::new(
            Some(ConsultationMode::Video),
            [Specialty::Dentist, Specialty::Cardiologist],
            None,
        )]
    );
}

#[test]
fn insertion_order_is_not_catalog_order() {
    let (mut controller, _log) = recording(FilterSelection::default());

    controller.toggle_specialty(Specialty::Homeopath);
    controller.toggle_specialty(Specialty::GeneralPhysician);
    controller.toggle_specialty(Specialty::Ent);
    controller.toggle_specialty(Specialty::Homeopath);
    controller.toggle_specialty(Specialty::Homeopath);

    assert_eq!(
        controller.selection().specialties(),
        &[Specialty::GeneralPhysician, Specialty::Ent, Specialty::Homeopath]
    );
}

#[test]
fn specialty_membership_follows_toggle_parity() {
    let (mut controller, log) = recording(FilterSelection::default());
    let mut counts: HashMap<Specialty, usize> = HashMap::new();

    let mut seed: u64 = 0x2545_F491_4F6C_DD1D;
    for _ in 0..500 {
        seed = seed
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        let specialty = Specialty::CATALOG[(seed >> 33) as usize % Specialty::CATALOG.len()];
        *counts.entry(specialty).or_default() += 1;
        controller.toggle_specialty(specialty);
    }

    for specialty in Specialty::CATALOG {
        let toggles = counts.get(specialty).copied().unwrap_or_default();
        assert_eq!(
            controller.is_selected(*specialty),
            toggles % 2 == 1,
            "{specialty} toggled {toggles} times"
        );
    }
    assert_eq!(log.borrow().len(), 500);

    let selected = controller.selection().specialties();
    let mut deduped = selected.to_vec();
    deduped.sort();
    deduped.dedup();
    assert_eq!(deduped.len(), selected.len());
}

#[test]
fn clear_all_resets_everything_with_one_notification() {
    let (mut controller, log) = recording(FilterSelection::new(
        Some(ConsultationMode::Clinic),
        [Specialty::Dentist, Specialty::Neurologist],
        Some(SortKey::Experience),
    ));

    controller.clear_all();

    assert!(controller.selection().is_empty());
    assert_eq!(*log.borrow(), vec![FilterSelection::default()]);
}

#[test]
fn clear_all_notifies_even_when_already_empty() {
    let (mut controller, log) = recording(FilterSelection::default());

    controller.clear_all();
    controller.clear_all();

    assert_eq!(log.borrow().len(), 2);
    assert!(log.borrow().iter().all(FilterSelection::is_empty));
}

#[test]
fn section_toggles_never_notify_or_touch_selection() {
    let initial = FilterSelection::new(Some(ConsultationMode::Video), [Specialty::Ent], None);
    let (mut controller, log) = recording(initial.clone());

    for section in Section::ALL {
        controller.toggle_section_visibility(section);
    }
    assert!(log.borrow().is_empty());
    assert_eq!(controller.selection(), &initial);
    assert!(Section::ALL
        .iter()
        .all(|section| !controller.visibility().is_expanded(*section)));

    controller.toggle_specialty(Specialty::Dentist);
    let payload = serde_json::to_value(&log.borrow()[0]).expect("serialize");
    assert_eq!(
        payload,
        serde_json::json!({
            "consultation_mode": "video",
            "specialties": ["ENT", "Dentist"],
            "sort_by": null,
        })
    );
}

#[test]
fn observer_sees_committed_state() {
    let log: Log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    let mut controller =
        FilterSelectionController::new(FilterSelection::default(), move |s: &FilterSelection| {
            sink.borrow_mut().push(s.clone())
        });

    controller.set_sort_key(SortKey::Fees);
    let latest = log.borrow().last().cloned().expect("notified");
    assert_eq!(&latest, controller.selection());
}

#[test]
fn apply_routes_actions_to_operations() {
    let (mut controller, log) = recording(FilterSelection::default());
    let script = [
        "mode:clinic",
        "specialty:Dietitian/Nutritionist",
        "section:speciality",
        "sort:fees",
        "mode:clinic",
        "clear",
    ];

    for line in script {
        controller.apply(line.parse().expect("valid action"));
    }

    let log = log.borrow();
    assert_eq!(log.len(), 5);
    assert_eq!(
        log[2],
        FilterSelection::new(
            Some(ConsultationMode::Clinic),
            [Specialty::DietitianNutritionist],
            Some(SortKey::Fees),
        )
    );
    assert_eq!(log[3].consultation_mode, None);
    assert_eq!(log[3].specialties(), &[Specialty::DietitianNutritionist]);
    assert_eq!(log[4], FilterSelection::default());
    assert!(!controller.visibility().is_expanded(Section::Specialities));
}

#[test]
fn struct_observer_can_be_recovered_from_controller() {
    #[derive(Default)]
    struct Counter {
        calls: usize,
        last_specialties: usize,
    }

    impl SelectionObserver for Counter {
        fn on_change(&mut self, selection: &FilterSelection) {
            self.calls += 1;
            self.last_specialties = selection.specialties().len();
        }
    }

    let mut controller = FilterSelectionController::new(FilterSelection::default(), Counter::default());
    controller.toggle_specialty(Specialty::Ayurveda);
    controller.toggle_specialty(Specialty::Oncologist);
    assert_eq!(controller.observer().calls, 2);

    let (selection, counter) = controller.into_parts();
    assert_eq!(selection.specialties().len(), 2);
    assert_eq!(counter.last_specialties, 2);
}
