#[cfg(test)]
mod common;

#[cfg(test)]
mod application_submit_tests;
#[cfg(test)]
mod auth_session_tests;
#[cfg(test)]
mod error_mapping_tests;
#[cfg(test)]
mod listing_crud_tests;
#[cfg(test)]
mod listing_query_tests;
#[cfg(test)]
mod notification_api_tests;
#[cfg(test)]
mod notification_collection_tests;
#[cfg(test)]
mod recruiter_applications_tests;
