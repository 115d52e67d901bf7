//! Test data constants for consistent testing
//!
//! This module centralizes the literal identifiers, mailboxes and names used
//! throughout the test suite so that fixtures stay consistent.

/// IRIs and IRLs for testing
pub mod iris {
    pub const ACTIVITY_COURSE: &str = "http://tincanapi.com/conformancetest/activityid";
    pub const ACTIVITY_QUIZ: &str = "http://example.com/activities/quiz-1";
    pub const ACTIVITY_LESSON: &str = "http://example.com/activities/lesson-2";

    pub const VERB_COMPLETED: &str = "http://adlnet.gov/expapi/verbs/completed";
    pub const VERB_ATTEMPTED: &str = "http://adlnet.gov/expapi/verbs/attempted";
    pub const VERB_VOIDED: &str = "http://adlnet.gov/expapi/verbs/voided";

    pub const TYPE_INTERACTION: &str = "http://adlnet.gov/expapi/activities/cmi.interaction";
    pub const TYPE_COURSE: &str = "http://adlnet.gov/expapi/activities/course";

    pub const MBOX_ALICE: &str = "mailto:a@example.com";
    pub const MBOX_CONFORMANCE: &str = "mailto:conformancetest@tincanapi.com";

    pub const HOME_PAGE: &str = "https://ex.org";
    pub const MORE_INFO: &str = "https://example.com/more-info";
    pub const ATTACHMENT_USAGE: &str = "http://id.tincanapi.com/attachment/supporting_media";
    pub const ATTACHMENT_FILE: &str = "https://example.com/files/certificate.pdf";
}

/// UUID strings for testing
pub mod uuids {
    pub const STATEMENT_A: &str = "12345678-1234-5678-8234-567812345678";
    pub const STATEMENT_B: &str = "39e24cc4-69af-4b01-a824-1fdc6ea8a609";
    pub const REGISTRATION: &str = "16fd2706-8baf-433b-82eb-8c7fada847da";
    pub const NAMESPACE_URL: &str = "6ba7b811-9dad-11d1-80b4-00c04fd430c8";
}

/// Actor names and identity channels for testing
pub mod actors {
    pub const ALICE: &str = "Alice";
    pub const BOB: &str = "Bob";
    pub const CAROL: &str = "Carol";
    pub const GROUP_NAME: &str = "Study Group";

    pub const ACCOUNT_NAME: &str = "bob01";
    pub const OPEN_ID: &str = "http://openid.tincanapi.com";
    pub const MBOX_SHA1_SUM: &str = "db77b9104b531ecbb0b967f6942549d0ba80fda1";
}

/// Profile identifiers for testing
pub mod profiles {
    pub const PROFILE_ID: &str = "profile-settings";
}
