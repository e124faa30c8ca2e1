//! The write path for answers: one respondent's answer vector applied
//! positionally against a form's questions.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::common::{Answer, Identity};
use crate::model::form::Form;

/// What a submission leaves behind when it fails on an already-answered question.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionPolicy {
    /// Every question is checked before anything is written, so a failed
    /// submission records nothing.
    #[default]
    Atomic,
    /// Answers are written in order and the walk stops at the first
    /// already-answered question; answers before it stay recorded.
    Partial,
}

impl Form {
    /// Record `answers[i]` as `respondent`'s answer to question `i`.
    ///
    /// Fails with [`Error::QuestionAnswerMismatch`] before any write if the
    /// lengths differ, and with [`Error::AlreadyAnswered`] at the first question
    /// `respondent` has answered before. See [`SubmissionPolicy`] for what the
    /// latter leaves behind.
    pub fn submit_answers(
        &mut self,
        answers: Vec<Answer>,
        respondent: &Identity,
        policy: SubmissionPolicy,
    ) -> Result<()> {
        let form = self.id();
        if answers.len() != self.questions().len() {
            return Err(Error::QuestionAnswerMismatch {
                questions: self.questions().len(),
                answers: answers.len(),
            });
        }

        if policy == SubmissionPolicy::Atomic {
            if let Some(index) = self
                .questions()
                .iter()
                .position(|question| question.has_answered(respondent))
            {
                return Err(Error::AlreadyAnswered {
                    form,
                    index,
                    question: self.questions()[index].id().clone(),
                    respondent: respondent.clone(),
                });
            }
        }

        for (index, (question, answer)) in self
            .questions_mut()
            .iter_mut()
            .zip(answers)
            .enumerate()
        {
            if !question.record_answer(respondent, answer) {
                if index > 0 {
                    warn!(
                        "Submission by {respondent} to form {form} failed at question {index}; \
                         answers to questions 0..{index} remain recorded"
                    );
                }
                return Err(Error::AlreadyAnswered {
                    form,
                    index,
                    question: question.id().clone(),
                    respondent: respondent.clone(),
                });
            }
        }

        debug!("Recorded answers from {respondent} to form {form}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::model::question::Question;

    fn two_question_form() -> Form {
        Form::example(vec![Question::example1(), Question::example2()])
    }

    #[test]
    fn answers_are_attributed_by_position() {
        let mut form = two_question_form();
        let respondent = Identity::respondent_example1();

        form.submit_answers(
            vec!["yes".to_string(), "no".to_string()],
            &respondent,
            SubmissionPolicy::Atomic,
        )
        .unwrap();

        assert_eq!(form.questions()[0].answer(&respondent), Some("yes"));
        assert_eq!(form.questions()[1].answer(&respondent), Some("no"));
    }

    #[test]
    fn wrong_length_writes_nothing() {
        for policy in [SubmissionPolicy::Atomic, SubmissionPolicy::Partial] {
            let mut form = two_question_form();
            let respondent = Identity::respondent_example1();

            for answers in [vec![], vec!["yes".to_string()], vec!["a".to_string(); 3]] {
                let submitted = answers.len();
                let err = form.submit_answers(answers, &respondent, policy).unwrap_err();
                assert_eq!(
                    err,
                    Error::QuestionAnswerMismatch {
                        questions: 2,
                        answers: submitted,
                    }
                );
            }
            assert!(form.questions().iter().all(|q| q.answer_count() == 0));
        }
    }

    #[test]
    fn empty_form_accepts_empty_submission() {
        let mut form = Form::example(vec![]);
        form.submit_answers(vec![], &Identity::respondent_example1(), SubmissionPolicy::Atomic)
            .unwrap();
    }

    /// Seed `respondent`'s answer to the second question only, so that a full
    /// submission fails at index 1.
    fn form_answered_at_index_one(respondent: &Identity) -> Form {
        let mut form = two_question_form();
        assert!(form.questions_mut()[1].record_answer(respondent, "earlier".to_string()));
        form
    }

    #[test]
    fn atomic_failure_records_nothing() {
        let respondent = Identity::respondent_example1();
        let mut form = form_answered_at_index_one(&respondent);

        let err = form
            .submit_answers(
                vec!["yes".to_string(), "no".to_string()],
                &respondent,
                SubmissionPolicy::Atomic,
            )
            .unwrap_err();

        assert_eq!(
            err,
            Error::AlreadyAnswered {
                form: form.id(),
                index: 1,
                question: "Q2".to_string(),
                respondent: respondent.clone(),
            }
        );
        assert!(!form.questions()[0].has_answered(&respondent));
        assert_eq!(form.questions()[1].answer(&respondent), Some("earlier"));
    }

    #[test]
    fn partial_failure_keeps_earlier_answers() {
        let respondent = Identity::respondent_example1();
        let mut form = form_answered_at_index_one(&respondent);

        let err = form
            .submit_answers(
                vec!["yes".to_string(), "no".to_string()],
                &respondent,
                SubmissionPolicy::Partial,
            )
            .unwrap_err();

        assert!(matches!(err, Error::AlreadyAnswered { index: 1, .. }));
        assert_eq!(form.questions()[0].answer(&respondent), Some("yes"));
        assert_eq!(form.questions()[1].answer(&respondent), Some("earlier"));
    }

    #[test]
    fn other_respondents_are_unaffected() {
        let mut form = two_question_form();
        let first = Identity::respondent_example1();
        let second = Identity::respondent_example2();

        form.submit_answers(
            vec!["yes".to_string(), "a".to_string()],
            &first,
            SubmissionPolicy::Atomic,
        )
        .unwrap();
        form.submit_answers(
            vec!["no".to_string(), "b".to_string()],
            &second,
            SubmissionPolicy::Atomic,
        )
        .unwrap();

        assert_eq!(form.questions()[0].answer_count(), 2);
        assert_eq!(form.questions()[0].answer(&first), Some("yes"));
        assert_eq!(form.questions()[0].answer(&second), Some("no"));
    }

    #[test]
    fn policy_names() {
        let policy: SubmissionPolicy = serde_json::from_str("\"partial\"").unwrap();
        assert_eq!(policy, SubmissionPolicy::Partial);
        assert_eq!(SubmissionPolicy::default(), SubmissionPolicy::Atomic);
    }
}
