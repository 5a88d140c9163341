//! Employee management flows against the in-memory store.

use pearl_core::employees::{EmployeeMgmtController, EmployeeMgmtStatus, SaveEmployeeData};
use pearl_core::models::{Address, ContactDetails, Employee, PersonalId};
use pearl_core::utils::id::{generate_employee_id, generate_user_id};
use pearl_core::validation::{FIELD_PIN, ValidationErrors};
use pearl_mock::{MemoryStore, RecordingView};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn make_employee(id: &str, first_name: &str, last_name: &str) -> Employee {
    Employee {
        id: id.to_string(),
        first_name: first_name.to_string(),
        middle_name: String::new(),
        last_name: last_name.to_string(),
        birthdate: "1990-01-15".to_string(),
        gender: "Female".to_string(),
        position: "Cashier".to_string(),
        address: Address {
            street: "11 Mabini St".to_string(),
            barangay: "San Isidro".to_string(),
            city_town: "Quezon City".to_string(),
            province: "Metro Manila".to_string(),
            zip: "1101".to_string(),
            ..Address::default()
        },
        contact_details: ContactDetails {
            phone_numbers: vec!["09171234567".to_string()],
            email: "staff@pearl.ph".to_string(),
        },
        personal_ids: vec![PersonalId {
            id_type: "SSS".to_string(),
            id_number: "34-1234567-8".to_string(),
        }],
        is_system_user: false,
    }
}

fn make_controller() -> EmployeeMgmtController<MemoryStore, RecordingView> {
    EmployeeMgmtController::new(MemoryStore::new(), RecordingView::new())
}

fn save(
    controller: &mut EmployeeMgmtController<MemoryStore, RecordingView>,
    employee: Employee,
    pin: &str,
    errors: &mut ValidationErrors,
) -> EmployeeMgmtStatus {
    controller.save(SaveEmployeeData {
        employee,
        pin: pin.to_string(),
        validation_result: Some(errors),
    })
}

#[test]
fn test_full_lifecycle_of_a_regular_employee() {
    init_tracing();
    let mut controller = make_controller();

    // Fresh store: the empty notification fires exactly once.
    assert!(controller.list().unwrap().is_empty());
    assert_eq!(controller.view().employees_empty.get(), 1);

    let mut rng = StdRng::seed_from_u64(11);
    let id = generate_employee_id(&mut rng);
    let employee = make_employee(&id, "Ana", "Cruz");
    let mut errors = ValidationErrors::new();
    assert_eq!(
        save(&mut controller, employee.clone(), "", &mut errors),
        EmployeeMgmtStatus::Success
    );
    assert!(controller.exists(&id));
    assert_eq!(controller.get_employee(&id).unwrap(), employee);
    assert_eq!(controller.data().employee_count(), 1);

    // One-field update keeps everything else intact.
    let mut promoted = employee.clone();
    promoted.position = "Store Manager".to_string();
    assert_eq!(
        save(&mut controller, promoted, "", &mut errors),
        EmployeeMgmtStatus::Success
    );
    let cached = controller.get_employee(&id).unwrap();
    assert_eq!(cached.position, "Store Manager");
    assert_eq!(cached.contact_details, employee.contact_details);
    assert_eq!(cached.address, employee.address);

    // No login record was ever touched for a regular employee.
    assert_eq!(controller.data().user_count(), 0);
    assert!(controller.view().users_created.borrow().is_empty());

    assert_eq!(controller.remove(&id), EmployeeMgmtStatus::Success);
    assert!(!controller.exists(&id));
    assert_eq!(controller.data().employee_count(), 0);
    assert_eq!(controller.view().removed.borrow().as_slice(), [id]);
}

#[test]
fn test_system_user_creation_provisions_a_login_record() {
    let mut controller = make_controller();
    let mut employee = make_employee("2641359", "Ben", "Ziv");
    employee.is_system_user = true;

    let mut errors = ValidationErrors::new();
    assert_eq!(
        save(&mut controller, employee, "4413", &mut errors),
        EmployeeMgmtStatus::Success
    );

    let store = controller.data();
    let user = store.user_for("2641359").expect("login record exists");
    assert!(user.user_id.starts_with("BZ"));
    assert_eq!(user.pin, "4413");
    assert_eq!(user.position, "Cashier");

    let created = controller.view().users_created.borrow();
    assert_eq!(created.len(), 1);
    assert_eq!(created[0].0, "Ben");
    assert_eq!(created[0].1, user.user_id);
}

#[test]
fn test_system_user_update_changes_only_the_position() {
    let mut controller = make_controller();
    let mut employee = make_employee("2641359", "Ben", "Ziv");
    employee.is_system_user = true;
    let mut errors = ValidationErrors::new();
    save(&mut controller, employee.clone(), "4413", &mut errors);

    employee.position = "Supervisor".to_string();
    assert_eq!(
        save(&mut controller, employee, "", &mut errors),
        EmployeeMgmtStatus::Success
    );

    let user = controller.data().user_for("2641359").unwrap();
    assert_eq!(user.position, "Supervisor");
    assert_eq!(user.pin, "4413");
    assert_eq!(controller.data().user_count(), 1);
}

#[test]
fn test_new_system_user_without_pin_fails_validation() {
    let mut controller = make_controller();
    let mut employee = make_employee("2641359", "Ben", "Ziv");
    employee.is_system_user = true;

    let mut errors = ValidationErrors::new();
    assert_eq!(
        save(&mut controller, employee, "", &mut errors),
        EmployeeMgmtStatus::Failed
    );
    assert!(errors.contains(FIELD_PIN));
    assert_eq!(controller.data().employee_count(), 0);
}

#[test]
fn test_rejected_user_write_rolls_the_employee_back() {
    let mut controller = make_controller();
    controller.data_mut().set_fail_user_writes(true);
    let mut employee = make_employee("2641359", "Ben", "Ziv");
    employee.is_system_user = true;

    let mut errors = ValidationErrors::new();
    assert_eq!(
        save(&mut controller, employee, "4413", &mut errors),
        EmployeeMgmtStatus::StoreUnavailable
    );
    // Store and cache agree again: nothing was created.
    assert_eq!(controller.data().employee_count(), 0);
    assert_eq!(controller.data().user_count(), 0);
    assert!(!controller.exists("2641359"));
}

#[test]
fn test_offline_store_surfaces_as_store_unavailable() {
    let mut controller = make_controller();
    controller.data_mut().set_available(false);

    let mut errors = ValidationErrors::new();
    assert_eq!(
        save(&mut controller, make_employee("2641359", "Ana", "Cruz"), "", &mut errors),
        EmployeeMgmtStatus::StoreUnavailable
    );
    assert!(controller.list().is_err());
}

#[test]
fn test_remove_requires_a_listed_record() {
    let mut controller = make_controller();
    controller
        .data_mut()
        .insert_employee(make_employee("2641359", "Ana", "Cruz"));

    // Without a prior list() the record is invisible to the controller.
    assert_eq!(controller.remove("2641359"), EmployeeMgmtStatus::NotFound);
    assert_eq!(controller.view().data_not_ready.get(), 1);
    assert_eq!(controller.data().employee_count(), 1);

    controller.list().unwrap();
    assert_eq!(controller.remove("2641359"), EmployeeMgmtStatus::Success);
}

#[test]
fn test_find_by_name_over_the_listed_cache() {
    let mut controller = make_controller();
    controller
        .data_mut()
        .insert_employee(make_employee("2641359", "Ana", "Cruz"));
    controller
        .data_mut()
        .insert_employee(make_employee("2641360", "Ben", "Ziv"));
    controller.list().unwrap();

    assert_eq!(controller.find_by_name("ana", "cruz").len(), 1);
    assert_eq!(controller.find_by_name("Ana", "Ziv").len(), 0);
}

#[test]
fn test_get_user_round_trip_through_the_store() {
    let mut controller = make_controller();
    let mut employee = make_employee("2641359", "Ben", "Ziv");
    employee.is_system_user = true;
    let mut errors = ValidationErrors::new();
    save(&mut controller, employee, "4413", &mut errors);

    let user = controller.get_user("2641359").unwrap().expect("user found");
    assert_eq!(user.employee_id, "2641359");
    assert!(controller.get_user("9999999").unwrap().is_none());
}

#[test]
fn test_generated_user_ids_follow_the_name() {
    let mut rng = StdRng::seed_from_u64(3);
    let user_id = generate_user_id("Ana", "Cruz", &mut rng);
    assert!(user_id.starts_with("AC"));
}
