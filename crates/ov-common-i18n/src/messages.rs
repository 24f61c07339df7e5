// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Messages requested by the viewer's dialogs and sidebar panels.
//!
//! Every message pairs a stable id with the English text shown when no
//! translation is available. Both built-in catalogs carry all of them.

use crate::localizer::Localizer;

/// A translatable message id with its fallback text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Message {
	pub id: &'static str,
	pub default: &'static str,
}

impl Message {
	pub const fn new(id: &'static str, default: &'static str) -> Self {
		Self { id, default }
	}

	/// Translate for the localizer's current locale.
	pub fn localize(&self, localizer: &Localizer) -> String {
		localizer.localize(self.id, Some(self.default), &[])
	}

	/// Translate with `{$name}` parameters.
	pub fn localize_with(&self, localizer: &Localizer, params: &[(&str, &str)]) -> String {
		localizer.localize(self.id, Some(self.default), params)
	}
}

// Shared
pub const CANCEL: Message = Message::new("cancel", "Cancel");
pub const SOMETHING_WENT_WRONG: Message =
	Message::new("somethingWentWrong", "Something went wrong");
pub const TRUE: Message = Message::new("true", "True");
pub const FALSE: Message = Message::new("false", "False");

// Open from URL dialog
pub const OPEN_MODEL_FROM_URL: Message = Message::new("openModelFromUrl", "Open Model from Url");
pub const HERE_LOAD_MODELS_URLS: Message = Message::new(
	"hereLoadModelsUrls",
	"Here you can load models based on their urls. You can add more lines if your model builds up from multiple files.",
);

// Snapshot dialog
pub const CREATE_SNAPSHOT: Message = Message::new("createSnapshot", "Create Snapshot");
pub const CREATE: Message = Message::new("create", "Create");
pub const SMALL_1280X720: Message = Message::new("small1280x720", "Small (1280x720)");
pub const MEDIUM_1920X1080: Message = Message::new("medium1920x1080", "Medium (1920x1080)");
pub const LARGE_2560X1440: Message = Message::new("large2560x1440", "Large (2560x1440)");
pub const CUSTOM: Message = Message::new("custom", "Custom");
pub const WIDTH: Message = Message::new("width", "Width");
pub const HEIGHT: Message = Message::new("height", "Height");

// Model loader
pub const LOADING_MODEL: Message = Message::new("loadingModel", "Loading Model");
pub const IMPORTING_MODEL: Message = Message::new("importingModel", "Importing Model");
pub const VISUALIZING_MODEL: Message = Message::new("visualizingModel", "Visualizing Model");
pub const NO_IMPORTABLE_FILE_FOUND: Message =
	Message::new("noImportableFileFound", "No importable file found.");
pub const FAILED_TO_LOAD_FILE_FOR_IMPORT: Message =
	Message::new("failedToLoadFileForImport", "Failed to load file for import.");
pub const FAILED_TO_IMPORT_MODEL: Message =
	Message::new("failedToImportModel", "Failed to import model.");
pub const UNKNOWN_ERROR: Message = Message::new("unknownError", "Unknown error.");
pub const SELECT_MODEL: Message = Message::new("selectModel", "Select Model");
pub const MULTIPLE_IMPORTABLE_MODELS_FOUND: Message = Message::new(
	"multipleImportableModelsFoundSelectOne",
	"Multiple importable models found. Select the model you would like to import from the list below.",
);

// Details panel
pub const DETAILS: Message = Message::new("details", "Details");
pub const VERTICES: Message = Message::new("vertices", "Vertices");
pub const TRIANGLES: Message = Message::new("triangles", "Triangles");
pub const SIZE_X: Message = Message::new("sizeX", "Size X");
pub const SIZE_Y: Message = Message::new("sizeY", "Size Y");
pub const SIZE_Z: Message = Message::new("sizeZ", "Size Z");
pub const VOLUME: Message = Message::new("volume", "Volume");
pub const SURFACE: Message = Message::new("surface", "Surface");
pub const CALCULATE: Message = Message::new("calculate", "Calculate...");
pub const PLEASE_WAIT: Message = Message::new("pleaseWait", "Please wait...");
pub const SOURCE: Message = Message::new("source", "Source");
pub const DEFAULT: Message = Message::new("default", "Default");
pub const MODEL: Message = Message::new("model", "Model");
pub const TYPE: Message = Message::new("type", "Type");
pub const COLOR: Message = Message::new("color", "Color");
pub const VERTEX_COLORS: Message = Message::new("vertexColors", "Vertex colors");
pub const AMBIENT: Message = Message::new("ambient", "Ambient");
pub const SPECULAR: Message = Message::new("specular", "Specular");
pub const METALNESS: Message = Message::new("metalness", "Metalness");
pub const ROUGHNESS: Message = Message::new("roughness", "Roughness");
pub const OPACITY: Message = Message::new("opacity", "Opacity");
pub const DIFFUSE_MAP: Message = Message::new("diffuseMap", "Diffuse Map");
pub const BUMP_MAP: Message = Message::new("bumpMap", "Bump Map");
pub const NORMAL_MAP: Message = Message::new("normalMap", "Normal Map");
pub const EMISSIVE_MAP: Message = Message::new("emissiveMap", "Emissive Map");
pub const SPECULAR_MAP: Message = Message::new("specularMap", "Specular Map");
pub const METALLIC_MAP: Message = Message::new("metallicMap", "Metallic Map");

// Measure panel
pub const MEASURE: Message = Message::new("measure", "Measure");
pub const ACTIVATE: Message = Message::new("activate", "Activate");
pub const DEACTIVATE: Message = Message::new("deactivate", "Deactivate");
pub const CLICK_ON_POINT_TO_START_MEASURE: Message =
	Message::new("clickOnPointToStartMeasure", "Click on a model point to start measure.");
pub const CLICK_ON_ANOTHER_POINT_TO_SEE_RESULTS: Message = Message::new(
	"clickOnAnotherPointToSeeResults",
	"Click on another model point to see the results.",
);
pub const DISTANCE_OF_POINTS: Message = Message::new("distanceOfPoints", "Distance of points");
pub const DISTANCE_OF_PARALLEL_FACES: Message =
	Message::new("distanceOfParallelFaces", "Distance of parallel faces");
pub const FACES_NOT_PARALLEL: Message = Message::new("facesNotParallel", "Faces are not parallel");
pub const ANGLE_OF_FACES: Message = Message::new("angleOfFaces", "Angle of faces");
pub const ACTIVATE_MEASURE_MODE_WITH_BUTTON_ABOVE: Message = Message::new(
	"activateMeasureModeWithButtonAbove",
	"Activate measure mode with the button above.",
);
pub const CLICK_TWO_POINTS_TO_SEE_RESULTS: Message = Message::new(
	"clickTwoPointsToSeeResults",
	"Click two points in the model to see the results.",
);

/// Every viewer message.
pub const ALL: &[Message] = &[
	CANCEL,
	SOMETHING_WENT_WRONG,
	TRUE,
	FALSE,
	OPEN_MODEL_FROM_URL,
	HERE_LOAD_MODELS_URLS,
	CREATE_SNAPSHOT,
	CREATE,
	SMALL_1280X720,
	MEDIUM_1920X1080,
	LARGE_2560X1440,
	CUSTOM,
	WIDTH,
	HEIGHT,
	LOADING_MODEL,
	IMPORTING_MODEL,
	VISUALIZING_MODEL,
	NO_IMPORTABLE_FILE_FOUND,
	FAILED_TO_LOAD_FILE_FOR_IMPORT,
	FAILED_TO_IMPORT_MODEL,
	UNKNOWN_ERROR,
	SELECT_MODEL,
	MULTIPLE_IMPORTABLE_MODELS_FOUND,
	DETAILS,
	VERTICES,
	TRIANGLES,
	SIZE_X,
	SIZE_Y,
	SIZE_Z,
	VOLUME,
	SURFACE,
	CALCULATE,
	PLEASE_WAIT,
	SOURCE,
	DEFAULT,
	MODEL,
	TYPE,
	COLOR,
	VERTEX_COLORS,
	AMBIENT,
	SPECULAR,
	METALNESS,
	ROUGHNESS,
	OPACITY,
	DIFFUSE_MAP,
	BUMP_MAP,
	NORMAL_MAP,
	EMISSIVE_MAP,
	SPECULAR_MAP,
	METALLIC_MAP,
	MEASURE,
	ACTIVATE,
	DEACTIVATE,
	CLICK_ON_POINT_TO_START_MEASURE,
	CLICK_ON_ANOTHER_POINT_TO_SEE_RESULTS,
	DISTANCE_OF_POINTS,
	DISTANCE_OF_PARALLEL_FACES,
	FACES_NOT_PARALLEL,
	ANGLE_OF_FACES,
	ACTIVATE_MEASURE_MODE_WITH_BUTTON_ABOVE,
	CLICK_TWO_POINTS_TO_SEE_RESULTS,
];

/// Why a model failed to import.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImportErrorCode {
	NoImportableFile,
	FailedToLoadFile,
	ImportFailed,
	Unknown,
}

impl ImportErrorCode {
	/// Title and body of the error dialog for this code.
	pub fn messages(self) -> (Message, Message) {
		let body = match self {
			ImportErrorCode::NoImportableFile => NO_IMPORTABLE_FILE_FOUND,
			ImportErrorCode::FailedToLoadFile => FAILED_TO_LOAD_FILE_FOR_IMPORT,
			ImportErrorCode::ImportFailed => FAILED_TO_IMPORT_MODEL,
			ImportErrorCode::Unknown => UNKNOWN_ERROR,
		};
		(SOMETHING_WENT_WRONG, body)
	}
}

/// Preset sizes offered by the snapshot dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SnapshotSize {
	Small,
	Medium,
	Large,
	Custom,
}

impl SnapshotSize {
	pub const ALL: [SnapshotSize; 4] = [
		SnapshotSize::Small,
		SnapshotSize::Medium,
		SnapshotSize::Large,
		SnapshotSize::Custom,
	];

	/// Width and height in pixels; `None` for a user-entered size.
	pub fn dimensions(self) -> Option<(u32, u32)> {
		match self {
			SnapshotSize::Small => Some((1280, 720)),
			SnapshotSize::Medium => Some((1920, 1080)),
			SnapshotSize::Large => Some((2560, 1440)),
			SnapshotSize::Custom => None,
		}
	}

	pub fn label(self) -> Message {
		match self {
			SnapshotSize::Small => SMALL_1280X720,
			SnapshotSize::Medium => MEDIUM_1920X1080,
			SnapshotSize::Large => LARGE_2560X1440,
			SnapshotSize::Custom => CUSTOM,
		}
	}
}

/// Display text for a boolean property value.
pub fn localized_bool(localizer: &Localizer, value: bool) -> String {
	let message = if value { TRUE } else { FALSE };
	message.localize(localizer)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::catalog::TranslationTable;
	use crate::config::I18nConfig;
	use crate::locale::LOCALE_PREFERENCE_KEY;
	use crate::store::MemoryStore;
	use std::collections::HashSet;
	use std::sync::Arc;

	fn localizer(locale: &str) -> Localizer {
		Localizer::new(
			TranslationTable::builtin(),
			Arc::new(MemoryStore::with_value(LOCALE_PREFERENCE_KEY, locale)),
			&I18nConfig::default(),
		)
		.unwrap()
	}

	#[test]
	fn test_ids_are_unique() {
		let ids: HashSet<&str> = ALL.iter().map(|m| m.id).collect();
		assert_eq!(ids.len(), ALL.len());
	}

	#[test]
	fn test_builtin_catalogs_cover_every_message() {
		let table = TranslationTable::builtin();
		for code in table.locales() {
			for message in ALL {
				assert!(
					table.lookup(code, message.id).is_some(),
					"{code} is missing {}",
					message.id
				);
			}
		}
	}

	#[test]
	fn test_english_matches_defaults() {
		let table = TranslationTable::builtin();
		for message in ALL {
			assert_eq!(table.lookup("en", message.id), Some(message.default));
		}
	}

	#[test]
	fn test_localize_message() {
		assert_eq!(CANCEL.localize(&localizer("it")), "Annulla");
		assert_eq!(MEASURE.localize(&localizer("en")), "Measure");
	}

	#[test]
	fn test_import_error_messages() {
		let (title, body) = ImportErrorCode::FailedToLoadFile.messages();
		assert_eq!(title, SOMETHING_WENT_WRONG);
		assert_eq!(body, FAILED_TO_LOAD_FILE_FOR_IMPORT);

		let l10n = localizer("it");
		let (_, body) = ImportErrorCode::NoImportableFile.messages();
		assert_eq!(body.localize(&l10n), "Nessun file importabile trovato.");
	}

	#[test]
	fn test_snapshot_sizes() {
		assert_eq!(SnapshotSize::Medium.dimensions(), Some((1920, 1080)));
		assert_eq!(SnapshotSize::Custom.dimensions(), None);
		assert_eq!(SnapshotSize::Large.label().localize(&localizer("it")), "Grande (2560x1440)");
		assert_eq!(SnapshotSize::ALL.len(), 4);
	}

	#[test]
	fn test_localized_bool() {
		let l10n = localizer("it");
		assert_eq!(localized_bool(&l10n, true), "Vero");
		assert_eq!(localized_bool(&l10n, false), "Falso");
	}
}
