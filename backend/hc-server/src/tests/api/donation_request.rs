use crate::DonationRequest;

fn donation(amount: &str, custom_amount: &str) -> DonationRequest {
    DonationRequest {
        amount: amount.to_string(),
        custom_amount: custom_amount.to_string(),
        ..DonationRequest::default()
    }
}

#[test]
fn given_default_form_when_final_amount_then_fifty_thousand() {
    assert_eq!(DonationRequest::default().final_amount(), Some(50_000));
}

#[test]
fn given_preset_when_final_amount_then_preset_used_and_custom_ignored() {
    let request = donation("100000", "7");

    assert_eq!(request.final_amount(), Some(100_000));
    assert_eq!(request.amount_field(), "amount");
}

#[test]
fn given_custom_choice_when_final_amount_then_custom_value_used() {
    let request = donation("custom", " 75000 ");

    assert_eq!(request.final_amount(), Some(75_000));
    assert_eq!(request.amount_field(), "customAmount");
}

#[test]
fn given_zero_blank_or_garbage_when_final_amount_then_none() {
    assert_eq!(donation("custom", "").final_amount(), None);
    assert_eq!(donation("custom", "0").final_amount(), None);
    assert_eq!(donation("custom", "-5").final_amount(), None);
    assert_eq!(donation("mucho", "").final_amount(), None);
}
