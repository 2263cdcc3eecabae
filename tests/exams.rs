mod utils;

use utils::prelude::*;

async fn create_exam(env: &Env, teacher: &User, body: Value) -> Value {
    let res = env.post("/v1/exams").user(teacher).json(&body).send().await;

    assert_eq!(res.status(), StatusCode::CREATED);

    res.json().await
}

fn september_exam() -> Value {
    json!({
        "name": "Data Science Midterm",
        "subject": "Data Science",
        "date": "2026-09-30",
        "semester": 5,
        "month": 9,
        "year": 2026,
        "attendanceThreshold": 75,
    })
}

async fn mark(env: &Env, teacher: &User, student: &User, date: &str, status: &str) {
    let res = env
        .post("/v1/attendance")
        .user(teacher)
        .json(&json!({
            "student": student.id,
            "date": date,
            "subject": "Data Science",
            "status": status,
        }))
        .send()
        .await;

    assert!(res.status().is_success());
}

mod crud {
    use super::*;

    #[tokio::test]
    async fn create_get_update_delete() {
        let env = setup().await;
        let teacher = env.create_teacher().await;
        let student = env.create_student().await;

        let exam = create_exam(&env, &teacher, september_exam()).await;

        assert_json_include!(
            actual: &exam,
            expected: json!({
                "name": "Data Science Midterm",
                "subject": "Data Science",
                "date": "2026-09-30",
                "semester": 5,
                "month": 9,
                "year": 2026,
                "attendanceThreshold": 75.0,
            })
        );

        let path = format!("/v1/exams/{}", exam["id"].as_str().unwrap());

        let res = env.get(&path).user(&student).send().await;
        assert_eq!(res.status(), StatusCode::OK);
        let fetched: Value = res.json().await;
        assert_json_eq!(fetched, exam);

        let res = env
            .put(&path)
            .user(&teacher)
            .json(&json!({
                "name": "Data Science Retake",
                "attendanceThreshold": 60,
            }))
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::OK);
        let updated: Value = res.json().await;
        assert_eq!(updated["name"], "Data Science Retake");
        assert_eq!(updated["attendanceThreshold"], 60.0);
        assert_eq!(updated["subject"], "Data Science");

        let res = env.delete(&path).user(&teacher).send().await;
        assert_eq!(res.status(), StatusCode::OK);

        let res = env.get(&path).user(&teacher).send().await;
        assert_error!(res, error::EXAM_NOT_FOUND);
    }

    #[tokio::test]
    async fn default_threshold() {
        let env = setup().await;
        let teacher = env.create_teacher().await;

        let mut body = september_exam();
        body.as_object_mut().unwrap().remove("attendanceThreshold");

        let exam = create_exam(&env, &teacher, body).await;
        assert_eq!(exam["attendanceThreshold"], 70.0);
    }

    #[tokio::test]
    async fn list_filters() {
        let env = setup().await;
        let teacher = env.create_teacher().await;

        create_exam(&env, &teacher, september_exam()).await;

        let mut october = september_exam();
        october["month"] = json!(10);
        october["date"] = json!("2026-10-30");
        create_exam(&env, &teacher, october).await;

        let res = env.get("/v1/exams").user(&teacher).send().await;
        let exams: Vec<Value> = res.json().await;
        assert_eq!(exams.len(), 2);

        let res = env
            .get("/v1/exams")
            .user(&teacher)
            .query(&[("month", "10"), ("year", "2026")])
            .send()
            .await;
        let exams: Vec<Value> = res.json().await;
        assert_eq!(exams.len(), 1);
        assert_eq!(exams[0]["month"], 10);

        let res = env
            .get("/v1/exams")
            .user(&teacher)
            .query(&[("subject", "FullStack")])
            .send()
            .await;
        let exams: Vec<Value> = res.json().await;
        assert!(exams.is_empty());
    }

    #[tokio::test]
    async fn not_found() {
        let env = setup().await;
        let teacher = env.create_teacher().await;
        let path = format!("/v1/exams/{}", Uuid::new_v4());

        let res = env.get(&path).user(&teacher).send().await;
        assert_error!(res, error::EXAM_NOT_FOUND);

        let res = env
            .put(&path)
            .user(&teacher)
            .json(&json!({ "name": "Nothing" }))
            .send()
            .await;
        assert_error!(res, error::EXAM_NOT_FOUND);

        let res = env.delete(&path).user(&teacher).send().await;
        assert_error!(res, error::EXAM_NOT_FOUND);
    }

    #[tokio::test]
    async fn invalid_month() {
        let env = setup().await;
        let teacher = env.create_teacher().await;

        let mut body = september_exam();
        body["month"] = json!(13);

        let res = env.post("/v1/exams").user(&teacher).json(&body).send().await;
        assert_error!(res, error::JSON_VALIDATE_INVALID);
    }

    #[tokio::test]
    async fn missing_fields() {
        let env = setup().await;
        let teacher = env.create_teacher().await;

        let res = env
            .post("/v1/exams")
            .user(&teacher)
            .json(&json!({ "name": "Data Science Midterm" }))
            .send()
            .await;
        assert_error!(res, error::JSON_MISSING_FIELDS);
    }

    #[tokio::test]
    async fn student_cannot_create() {
        let env = setup().await;
        let student = env.create_student().await;

        let res = env
            .post("/v1/exams")
            .user(&student)
            .json(&september_exam())
            .send()
            .await;
        assert_error!(res, error::NOT_ENOUGH_PERMISSIONS);
    }
}

mod eligibility {
    use super::*;

    #[tokio::test]
    async fn calculate_for_every_student() {
        let env = setup().await;
        let teacher = env.create_teacher().await;
        let regular = env.create_student().await;
        let absent = env.create_student().await;
        let idle = env.create_student().await;

        let exam = create_exam(&env, &teacher, september_exam()).await;
        let exam_id = exam["id"].as_str().unwrap().to_owned();

        mark(&env, &teacher, &regular, "2026-09-01", "present").await;
        mark(&env, &teacher, &regular, "2026-09-02", "present").await;
        mark(&env, &teacher, &regular, "2026-09-03", "present").await;
        mark(&env, &teacher, &regular, "2026-09-04", "absent").await;
        mark(&env, &teacher, &absent, "2026-09-01", "absent").await;
        mark(&env, &teacher, &absent, "2026-09-02", "present").await;
        // other month, ignored
        mark(&env, &teacher, &absent, "2026-08-31", "present").await;

        let res = env
            .post(&format!("/v1/exams/{exam_id}/calculate-eligibility"))
            .user(&teacher)
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::OK);

        let report: Value = res.json().await;
        assert_eq!(report["created"], 3);
        assert_eq!(report["updated"], 0);
        assert_eq!(report["results"].as_array().unwrap().len(), 3);
        assert!(report["failures"].as_array().unwrap().is_empty());

        let res = env
            .get(&format!("/v1/exams/{exam_id}/eligibility"))
            .user(&teacher)
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::OK);

        let records: Vec<Value> = res.json().await;
        assert_eq!(records.len(), 3);

        let find = |id: Uuid| {
            records
                .iter()
                .find(|record| record["student"]["id"] == json!(id))
                .unwrap()
        };

        assert_json_include!(
            actual: find(regular.id),
            expected: json!({
                "exam": exam_id,
                "subject": "Data Science",
                "isEligible": true,
                "attendancePercentage": 75.0,
                "totalClasses": 4,
                "attendedClasses": 3,
            })
        );
        assert_json_include!(
            actual: find(absent.id),
            expected: json!({
                "isEligible": false,
                "attendancePercentage": 50.0,
                "totalClasses": 2,
                "attendedClasses": 1,
            })
        );
        assert_json_include!(
            actual: find(idle.id),
            expected: json!({
                "isEligible": false,
                "attendancePercentage": 0.0,
                "totalClasses": 0,
            })
        );
    }

    #[tokio::test]
    async fn recalculation_updates_in_place() {
        let env = setup().await;
        let teacher = env.create_teacher().await;
        let student = env.create_student().await;

        let exam = create_exam(&env, &teacher, september_exam()).await;
        let exam_id = exam["id"].as_str().unwrap().to_owned();

        mark(&env, &teacher, &student, "2026-09-01", "absent").await;

        let res = env
            .post(&format!("/v1/exams/{exam_id}/calculate-eligibility"))
            .user(&teacher)
            .send()
            .await;
        let first: Value = res.json().await;
        assert_eq!(first["created"], 1);
        assert_eq!(first["results"][0]["isEligible"], false);

        mark(&env, &teacher, &student, "2026-09-01", "present").await;

        let res = env
            .post(&format!("/v1/exams/{exam_id}/calculate-eligibility"))
            .user(&teacher)
            .send()
            .await;
        let second: Value = res.json().await;
        assert_eq!(second["created"], 0);
        assert_eq!(second["updated"], 1);
        assert_eq!(second["results"][0]["id"], first["results"][0]["id"]);
        assert_eq!(second["results"][0]["isEligible"], true);

        let res = env
            .get(&format!("/v1/exams/eligibility/student/{}", student.id))
            .user(&student)
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::OK);

        let records: Vec<Value> = res.json().await;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["student"], json!(student.id));
        assert_eq!(records[0]["exam"]["id"], json!(exam_id));
        assert_eq!(records[0]["isEligible"], true);
    }

    #[tokio::test]
    async fn deleting_exam_removes_records() {
        let env = setup().await;
        let teacher = env.create_teacher().await;
        let student = env.create_student().await;

        let exam = create_exam(&env, &teacher, september_exam()).await;
        let exam_id = exam["id"].as_str().unwrap().to_owned();

        env.post(&format!("/v1/exams/{exam_id}/calculate-eligibility"))
            .user(&teacher)
            .send()
            .await;

        let res = env
            .delete(&format!("/v1/exams/{exam_id}"))
            .user(&teacher)
            .send()
            .await;
        assert_eq!(res.status(), StatusCode::OK);

        let res = env
            .get(&format!("/v1/exams/eligibility/student/{}", student.id))
            .user(&teacher)
            .send()
            .await;
        let records: Vec<Value> = res.json().await;
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn unknown_exam() {
        let env = setup().await;
        let teacher = env.create_teacher().await;

        let res = env
            .post(&format!("/v1/exams/{}/calculate-eligibility", Uuid::new_v4()))
            .user(&teacher)
            .send()
            .await;

        assert_error!(res, error::EXAM_NOT_FOUND);
    }

    #[tokio::test]
    async fn other_students_records() {
        let env = setup().await;
        let student1 = env.create_student().await;
        let student2 = env.create_student().await;

        let res = env
            .get(&format!("/v1/exams/eligibility/student/{}", student1.id))
            .user(&student2)
            .send()
            .await;

        assert_error!(res, error::NOT_AUTHORIZED);
    }

    #[tokio::test]
    async fn student_cannot_calculate() {
        let env = setup().await;
        let teacher = env.create_teacher().await;
        let student = env.create_student().await;

        let exam = create_exam(&env, &teacher, september_exam()).await;

        let res = env
            .post(&format!(
                "/v1/exams/{}/calculate-eligibility",
                exam["id"].as_str().unwrap()
            ))
            .user(&student)
            .send()
            .await;

        assert_error!(res, error::NOT_ENOUGH_PERMISSIONS);
    }

    #[tokio::test]
    async fn changing_subject_keeps_one_record_per_student() {
        let env = setup().await;
        let teacher = env.create_teacher().await;
        let student = env.create_student().await;

        let exam = create_exam(&env, &teacher, september_exam()).await;
        let exam_id = exam["id"].as_str().unwrap().to_owned();

        mark(&env, &teacher, &student, "2026-09-01", "present").await;

        let res = env
            .post(&format!("/v1/exams/{exam_id}/calculate-eligibility"))
            .user(&teacher)
            .send()
            .await;
        assert_eq!(res.status(), StatusCode::OK);

        let res = env
            .put(&format!("/v1/exams/{exam_id}"))
            .user(&teacher)
            .json(&json!({ "subject": "Machine Learning" }))
            .send()
            .await;
        assert_eq!(res.status(), StatusCode::OK);

        let res = env
            .get(&format!("/v1/exams/{exam_id}/eligibility"))
            .user(&teacher)
            .send()
            .await;
        let records: Vec<Value> = res.json().await;
        assert!(records.is_empty());

        let res = env
            .post(&format!("/v1/exams/{exam_id}/calculate-eligibility"))
            .user(&teacher)
            .send()
            .await;
        let report: Value = res.json().await;
        assert_eq!(report["created"], 1);

        let res = env
            .get(&format!("/v1/exams/{exam_id}/eligibility"))
            .user(&teacher)
            .send()
            .await;
        let records: Vec<Value> = res.json().await;
        assert_eq!(records.len(), 1);
        assert_json_include!(
            actual: &records[0],
            expected: json!({
                "subject": "Machine Learning",
                "totalClasses": 0,
                "isEligible": false,
            })
        );
    }
}
