//! Quiz Query Handlers

use std::sync::{Arc, Mutex};

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use crate::application::error::ApplicationError;
use crate::application::ports::QuestionRepositoryPort;
use crate::application::queries::NextQuizQuestion;
use crate::domain::trivia::{pick_question, Question};

/// 可替换的随机源
pub type QuizRng = Box<dyn RngCore + Send>;

/// 构造随机源：给定种子时结果可复现，否则使用系统熵
pub fn quiz_rng(seed: Option<u64>) -> QuizRng {
    match seed {
        Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
        None => Box::new(StdRng::from_entropy()),
    }
}

/// NextQuizQuestion Handler
///
/// 随机源锁只在同步抽题期间持有，不跨越 await
pub struct NextQuizQuestionHandler {
    question_repo: Arc<dyn QuestionRepositoryPort>,
    rng: Mutex<QuizRng>,
}

impl NextQuizQuestionHandler {
    pub fn new(question_repo: Arc<dyn QuestionRepositoryPort>, rng: QuizRng) -> Self {
        Self {
            question_repo,
            rng: Mutex::new(rng),
        }
    }

    /// 返回 None 表示候选题目已耗尽
    pub async fn handle(
        &self,
        query: NextQuizQuestion,
    ) -> Result<Option<Question>, ApplicationError> {
        let candidates = self
            .question_repo
            .find_quiz_candidates(query.scope.category_id())
            .await?;

        let candidate_count = candidates.len();
        let picked = {
            let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            pick_question(candidates, &query.previous_questions, query.scope, &mut **rng)
        };

        tracing::debug!(
            scope = ?query.scope,
            previous = query.previous_questions.len(),
            candidates = candidate_count,
            picked = ?picked.as_ref().map(|q| q.id),
            "Quiz question selected"
        );

        Ok(picked)
    }
}
