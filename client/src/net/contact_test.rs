use super::*;

#[test]
fn success_statuses_are_ok() {
    assert_eq!(check_status(200), Ok(()));
    assert_eq!(check_status(201), Ok(()));
    assert_eq!(check_status(299), Ok(()));
}

#[test]
fn non_success_statuses_are_rejected() {
    for status in [199, 301, 400, 422, 500, 503] {
        assert_eq!(check_status(status), Err(SubmitError::Rejected { status }));
    }
}

#[test]
fn user_messages_are_generic() {
    assert_eq!(
        SubmitError::Rejected { status: 500 }.user_message(),
        "Something went wrong. Please try again."
    );
    assert_eq!(
        SubmitError::Network("offline".to_owned()).user_message(),
        "An error occurred. Please try again."
    );
}

#[test]
fn error_display_includes_detail() {
    assert_eq!(
        SubmitError::Rejected { status: 422 }.to_string(),
        "form backend rejected submission: status 422"
    );
    assert_eq!(SubmitError::Network("dns".to_owned()).to_string(), "form submission failed: dns");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn submit_is_unavailable_outside_the_browser() {
    let form = ContactForm::default();
    let result = futures::executor::block_on(submit_contact(&form));
    assert!(matches!(result, Err(SubmitError::Network(_))));
}
