use halcms_api::ApiError;
use halcms_hal::HalError;
use halcms_storage::StorageError;
use pretty_assertions::assert_eq;

#[test]
fn storage_not_found_maps_to_404() {
    let err: ApiError = StorageError::NotFound("node 5".into()).into();
    assert_eq!(err.status_code(), 404);
    assert_eq!(err.representations()[0].message, "node 5 was not found");
}

#[test]
fn storage_failures_map_to_infra() {
    for source in [
        StorageError::Unavailable("down".into()),
        StorageError::Backend("boom".into()),
    ] {
        let err: ApiError = source.into();
        assert!(matches!(err, ApiError::Infra(_)));
        assert_eq!(err.status_code(), 500);
    }
}

#[test]
fn infra_detail_is_not_exposed() {
    let err = ApiError::Infra("connection string with secrets".into());
    let reps = err.representations();
    assert_eq!(reps.len(), 1);
    assert_eq!(reps[0].error_code, "InternalError");
    assert!(!reps[0].message.contains("secrets"));
}

#[test]
fn hal_errors_are_infra() {
    let err: ApiError = HalError::InvalidArgument("pageSize".into()).into();
    assert_eq!(err.status_code(), 500);
}

#[test]
fn node_not_found_helper() {
    let err = ApiError::node_not_found(17);
    assert_eq!(err.to_string(), "not found: Node 17 was not found");
}

#[test]
fn method_not_allowed_is_405_with_one_error() {
    let err = ApiError::method_not_allowed("DELETE");
    assert_eq!(err.status_code(), 405);
    let reps = err.representations();
    assert_eq!(reps.len(), 1);
    assert_eq!(reps[0].log_ref, "method");
    assert_eq!(reps[0].error_code, "Invalid");
    assert!(reps[0].message.contains("DELETE"));
}
