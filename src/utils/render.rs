// Static floor plan export

use std::fs;
use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::error::NavigatorError;
use crate::models::{floor_name, Building, Floor, Route};
use crate::presenter::{
    classify, floor_connections, floor_nodes, floor_segments, FloorBounds, NodeRole, Segment,
    Selection,
};

const PATH_COLOR: RGBColor = RGBColor(37, 99, 235);
const SOURCE_COLOR: RGBColor = RGBColor(22, 163, 74);
const DESTINATION_COLOR: RGBColor = RGBColor(220, 38, 38);
const ON_ROUTE_COLOR: RGBColor = RGBColor(96, 165, 250);
const ROOM_COLOR: RGBColor = RGBColor(203, 213, 225);
const LINE_COLOR: RGBColor = RGBColor(148, 163, 184);

/// Everything needed to draw one floor
pub struct FloorPlan<'a> {
    pub building: &'a Building,
    pub floor: Floor,
    pub route: &'a Route,
    pub selection: Selection<'a>,
    pub padding: f64,
}

impl<'a> FloorPlan<'a> {
    pub fn new(building: &'a Building, floor: Floor, route: &'a Route, padding: f64) -> Self {
        Self {
            building,
            floor,
            route,
            selection: Selection {
                source: route.source(),
                destination: route.destination(),
            },
            padding,
        }
    }

    pub fn with_selection(mut self, selection: Selection<'a>) -> Self {
        self.selection = selection;
        self
    }

    /// Renders the floor as an SVG document
    pub fn to_svg(&self) -> Result<String, NavigatorError> {
        let bounds = FloorBounds::of_floor(self.building, self.floor, self.padding);
        let size = (bounds.width.max(1.0) as u32, bounds.height.max(1.0) as u32);

        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, size).into_drawing_area();
            self.draw(&root, &bounds)
                .map_err(|e| NavigatorError::Render(e.to_string()))?;
            root.present()
                .map_err(|e| NavigatorError::Render(e.to_string()))?;
        }

        log::debug!(
            "Rendered {} ({} bytes of SVG)",
            floor_name(self.floor),
            svg.len()
        );
        Ok(svg)
    }

    /// Renders the floor and writes the SVG document to `path`
    pub fn write_svg(&self, path: impl AsRef<Path>) -> Result<(), NavigatorError> {
        let svg = self.to_svg()?;
        fs::write(path.as_ref(), svg)?;
        log::info!("Wrote {} to {}", floor_name(self.floor), path.as_ref().display());
        Ok(())
    }

    fn draw<DB: DrawingBackend>(
        &self,
        root: &DrawingArea<DB, Shift>,
        bounds: &FloorBounds,
    ) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
        root.fill(&WHITE)?;

        // y grows downwards in the authored data, so plot -y
        let mut chart = ChartBuilder::on(root).build_cartesian_2d(
            bounds.min_x..bounds.max_x(),
            -bounds.max_y()..-bounds.min_y,
        )?;

        let line =
            |segment: &Segment| vec![(segment.x1, -segment.y1), (segment.x2, -segment.y2)];

        for segment in floor_connections(self.building, self.floor) {
            chart.draw_series(LineSeries::new(line(&segment), LINE_COLOR.stroke_width(2)))?;
        }

        for segment in floor_segments(self.building, self.route, self.floor) {
            chart.draw_series(LineSeries::new(
                line(&segment),
                PATH_COLOR.mix(0.3).stroke_width(8),
            ))?;
            chart.draw_series(LineSeries::new(line(&segment), PATH_COLOR.stroke_width(4)))?;
        }

        for room in floor_nodes(self.building, self.floor) {
            let color = match classify(&room.id, self.route, self.selection) {
                NodeRole::Source => SOURCE_COLOR,
                NodeRole::Destination => DESTINATION_COLOR,
                NodeRole::OnRoute => ON_ROUTE_COLOR,
                NodeRole::Default => ROOM_COLOR,
            };

            chart.draw_series(std::iter::once(Circle::new(
                (room.x, -room.y),
                10,
                ShapeStyle::from(&color).filled(),
            )))?;
            chart.draw_series(std::iter::once(Text::new(
                room.name.clone(),
                (room.x, -room.y - 20.0),
                ("sans-serif", 11).into_font(),
            )))?;
        }

        chart.draw_series(std::iter::once(Text::new(
            floor_name(self.floor),
            (bounds.min_x + 10.0, -bounds.min_y - 20.0),
            ("sans-serif", 16).into_font(),
        )))?;

        Ok(())
    }
}
