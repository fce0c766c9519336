//! Concrete character implementation owning one component pair.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use ocular_core::{
    Character, ItemHandle, ItemId, LevelProgression, LevelSource, NoticeCategory, StrainGauge,
    StrainSink, SystemEnv,
};

/// Outbound text message queued for the character's client connection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub category: NoticeCategory,
    pub text: String,
}

/// A server-side character owning its eye-power progression and strain gauge.
///
/// `Rc`-owned by the session; the components hold only weak back-references,
/// so dropping the character tears everything down regardless of pending
/// deferred ticks.
pub struct GameCharacter {
    name: String,
    eye_slot: Cell<Option<ItemId>>,
    notices: RefCell<VecDeque<Notice>>,
    progression: Rc<RefCell<LevelProgression>>,
    strain: Rc<RefCell<StrainGauge>>,
}

impl GameCharacter {
    /// Character name (also exposed through the `Character` trait).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Creates a character and binds both components to it.
    pub fn spawn(name: impl Into<String>, env: &SystemEnv<'_>) -> Rc<Self> {
        let character = Rc::new(Self {
            name: name.into(),
            eye_slot: Cell::new(None),
            notices: RefCell::new(VecDeque::new()),
            progression: Rc::new(RefCell::new(LevelProgression::default())),
            strain: Rc::new(RefCell::new(StrainGauge::default())),
        });

        let handle: Rc<dyn Character> = character.clone();
        character.progression.borrow_mut().initialize(&handle, env);
        character.strain.borrow_mut().initialize(&handle, env);

        character
    }

    pub fn progression(&self) -> &Rc<RefCell<LevelProgression>> {
        &self.progression
    }

    pub fn strain(&self) -> &Rc<RefCell<StrainGauge>> {
        &self.strain
    }

    /// Takes all queued notices, oldest first.
    pub fn drain_notices(&self) -> Vec<Notice> {
        self.notices.borrow_mut().drain(..).collect()
    }
}

impl Character for GameCharacter {
    fn name(&self) -> &str {
        &self.name
    }

    fn send_notice(&self, category: NoticeCategory, text: &str) {
        tracing::debug!("[Character] notice for {}: {}", self.name, text);
        self.notices.borrow_mut().push_back(Notice {
            category,
            text: text.to_string(),
        });
    }

    fn eye_slot_item(&self) -> Option<ItemId> {
        self.eye_slot.get()
    }

    fn set_eye_slot_item(&self, item: ItemHandle) {
        self.eye_slot.set(Some(item.id));
    }

    fn clear_eye_slot(&self) {
        self.eye_slot.set(None);
    }

    fn level_source(&self) -> Option<Rc<dyn LevelSource>> {
        Some(self.progression.clone())
    }

    fn strain_sink(&self) -> Option<Rc<dyn StrainSink>> {
        Some(self.strain.clone())
    }
}
